//! Report command implementation.
//!
//! This is what `envpath` does when run without a subcommand: read the
//! path-list variable, classify its entries, and print the report selected
//! by the flags. The flags are turned into one immutable `ReportConfig`
//! before anything runs.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{ArgAction, Args};
use envpath::path::{read_path_list_from, FilesystemProbe, DEFAULT_VARIABLE};
use envpath::report::{FixedAnswer, ReaderConfirm};
use envpath::{PromptPolicy, ReportConfig, Reporter};

/// Report on the entries of the PATH environment variable.
#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug)]
pub struct ReportCommand {
    /// Print information about this executable and exit
    #[arg(long)]
    pub about: bool,

    /// Only print the number of entries
    #[arg(long)]
    pub only_count: bool,

    /// Only print valid entries, one per line
    #[arg(long)]
    pub only_list_valid: bool,

    /// Only print invalid entries, one per line
    #[arg(long)]
    pub only_list_invalid: bool,

    /// Print the classification as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Print the number of entries
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub count: bool,

    /// List every entry
    #[arg(long)]
    pub list: bool,

    /// List the invalid entries
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub list_invalid: bool,

    /// Do not list the invalid entries
    #[arg(long)]
    pub do_not_list_invalid: bool,

    /// Print the cleaned value without asking
    #[arg(long, short = 'y', conflicts_with = "no_prompt")]
    pub yes: bool,

    /// Never ask for or print the cleaned value
    #[arg(long)]
    pub no_prompt: bool,

    /// Environment variable to inspect
    #[arg(long, value_name = "NAME", default_value = DEFAULT_VARIABLE, env = "ENVPATH_VAR")]
    pub var: String,
}

impl ReportCommand {
    /// Build the report configuration from the parsed flags.
    pub fn to_config(&self) -> ReportConfig {
        let prompt = if self.yes {
            PromptPolicy::AssumeYes
        } else if self.no_prompt {
            PromptPolicy::AssumeNo
        } else {
            PromptPolicy::Ask
        };

        ReportConfig {
            about: self.about,
            only_count: self.only_count,
            only_list_valid: self.only_list_valid,
            only_list_invalid: self.only_list_invalid,
            json: self.json,
            count: self.count,
            list: self.list,
            list_invalid: self.list_invalid && !self.do_not_list_invalid,
            prompt,
        }
    }

    /// Execute the report command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = &global.logger;
        let config = self.to_config();

        // 1. Read the variable
        let paths = read_path_list_from(&self.var)?;
        if !paths.is_unicode() {
            logger.warn(&format!(
                "{} is not valid unicode; JSON output and logs show those entries lossily",
                paths.variable()
            ));
        }
        logger.debug(&format!(
            "read {} entries from {}",
            paths.len(),
            paths.variable()
        ));

        // 2. Classify and report to stdout; stdin is only touched when the
        // run may prompt
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let outcome = if config.is_interactive() {
            Reporter::new(config, &FilesystemProbe, ReaderConfirm::stdin())
                .run(&paths, &mut handle)?
        } else {
            Reporter::new(config, &FilesystemProbe, FixedAnswer(false))
                .run(&paths, &mut handle)?
        };

        if let Some(classified) = &outcome.classified {
            logger.info(&format!(
                "{} valid, {} invalid",
                classified.valid().len(),
                classified.invalid().count()
            ));
        }

        Ok(())
    }
}
