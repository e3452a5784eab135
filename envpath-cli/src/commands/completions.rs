//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "envpath";

/// Generate shell completion scripts
#[derive(Parser, Debug)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        global
            .logger
            .info(&format!("generating {} completion script", self.shell));

        if !global.quiet {
            eprintln!("# Run the following command to enable completions:");
            match self.shell {
                Shell::Bash => {
                    eprintln!(
                        "#   envpath completions bash > ~/.local/share/bash-completion/completions/envpath"
                    );
                }
                Shell::Zsh => {
                    eprintln!("#   envpath completions zsh > ~/.zsh/completions/_envpath");
                    eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                }
                Shell::Fish => {
                    eprintln!("#   envpath completions fish > ~/.config/fish/completions/envpath.fish");
                }
                Shell::PowerShell => {
                    eprintln!("#   envpath completions powershell | Out-String | Invoke-Expression");
                }
                _ => {
                    // No install hint for the remaining shells
                }
            }
            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
