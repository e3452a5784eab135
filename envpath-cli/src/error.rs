//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;

use envpath::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Library(_) => 6,
        }
    }

    /// Whether the error only means stdout was closed by its reader.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            CliError::Io(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
            CliError::Library(e) => e.is_broken_pipe(),
            CliError::InvalidArguments(_) => false,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::InvalidArguments(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::InvalidVariable { .. } => CliError::InvalidArguments(e.to_string()),
            LibError::Io(io) => CliError::Io(io),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_variable_maps_to_invalid_arguments() {
        let err: CliError = LibError::InvalidVariable {
            name: String::new(),
            reason: "must not be empty".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().starts_with("Invalid arguments"));
    }

    #[test]
    fn test_broken_pipe_through_library_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: CliError = LibError::Io(io).into();
        assert!(err.is_broken_pipe());
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_other_io_error_is_not_broken_pipe() {
        let err: CliError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(!err.is_broken_pipe());
    }
}
