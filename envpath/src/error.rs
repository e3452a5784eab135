//! Error types for the envpath library.
//!
//! Almost nothing in envpath is fatal: failed filesystem lookups and failed
//! confirmation reads are recovered where they happen. What remains are
//! failures to produce output at all, collected here using `thiserror`.

use thiserror::Error;

/// Result type alias for operations that may fail with an envpath error.
///
/// # Examples
///
/// ```
/// use envpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the envpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing the report to its output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The machine-readable report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The requested environment variable name cannot be looked up.
    #[error("invalid variable name '{name}': {reason}")]
    InvalidVariable {
        /// The rejected variable name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },
}

impl Error {
    /// Check if the error means the reader of our output went away.
    ///
    /// A closed pipe (`envpath --only-list-valid | head -1`) is not a failure
    /// of the tool, so callers use this to exit quietly.
    ///
    /// # Examples
    ///
    /// ```
    /// use envpath::Error;
    /// use std::io;
    ///
    /// let err = Error::Io(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
    /// assert!(err.is_broken_pipe());
    /// ```
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
