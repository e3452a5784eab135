//! CLI command implementations.
//!
//! - `report`: the default action, run when no subcommand is given
//! - `completions`: generate shell completion scripts

pub mod completions;
pub mod report;

pub use completions::CompletionsCommand;
pub use report::ReportCommand;
