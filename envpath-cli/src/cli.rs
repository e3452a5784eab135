//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! The report flags live at the top level; `completions` is the only
//! subcommand.

use crate::commands::{CompletionsCommand, ReportCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for inspecting the PATH environment variable.
#[derive(Parser)]
#[command(name = "envpath")]
#[command(version, about = "Inspect and clean the PATH environment variable", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub report: ReportCommand,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
