//! Shared state for CLI commands.

use envpath::Logger;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Flags kept alongside the logger built from them
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Logger configured from the flags above and `ENVPATH_LOG_MODE`.
    pub logger: Logger,
}

impl GlobalOptions {
    /// Build options and the logger from the global flags.
    #[must_use]
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            logger: envpath::init_logger(verbose, quiet),
        }
    }
}
