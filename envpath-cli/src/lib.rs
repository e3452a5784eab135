//! Library exports for envpath-cli.
//!
//! This module exports the CLI structure for use by the integration tests
//! and documentation tooling.

pub mod args;
pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
