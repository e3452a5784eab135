//! Main entry point for the envpath CLI.
//!
//! Without a subcommand, envpath reports on the entries of `PATH`:
//! how many there are, which are not existing directories, and, on request,
//! the value with those entries removed. The `completions` subcommand prints
//! shell completion scripts.

mod args;
mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Accept single-dash long flags before clap sees them
    let cli = Cli::parse_from(args::normalize_args(std::env::args_os()));

    // Initialize logging based on verbosity
    let global = GlobalOptions::from_flags(cli.verbose, cli.quiet);

    let result = match cli.command {
        Some(cli::Command::Completions(cmd)) => cmd.execute(&global),
        None => cli.report.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) if e.is_broken_pipe() => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
