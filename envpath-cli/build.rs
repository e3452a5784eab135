//! Build script for envpath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .action(ArgAction::SetTrue)
}

fn bool_option(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("BOOL")
        .num_args(0..=1)
        .require_equals(true)
        .default_value("true")
        .default_missing_value("true")
        .action(ArgAction::Set)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/report.rs.
fn build_cli() -> Command {
    Command::new("envpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and clean the PATH environment variable")
        .long_about(
            "Count the entries of PATH, report the ones that are not existing directories, \
             and optionally print the value with those entries removed. \
             The environment itself is never modified.",
        )
        .arg(flag("verbose", "Enable verbose output").global(true))
        .arg(flag("quiet", "Suppress non-essential output").global(true))
        .arg(flag("about", "Print information about this executable and exit"))
        .arg(flag("only-count", "Only print the number of entries"))
        .arg(flag("only-list-valid", "Only print valid entries, one per line"))
        .arg(flag("only-list-invalid", "Only print invalid entries, one per line"))
        .arg(flag("json", "Print the classification as JSON and exit"))
        .arg(bool_option("count", "Print the number of entries"))
        .arg(flag("list", "List every entry"))
        .arg(bool_option("list-invalid", "List the invalid entries"))
        .arg(flag("do-not-list-invalid", "Do not list the invalid entries"))
        .arg(flag("yes", "Print the cleaned value without asking").short('y'))
        .arg(flag("no-prompt", "Never ask for or print the cleaned value"))
        .arg(
            Arg::new("var")
                .long("var")
                .help("Environment variable to inspect")
                .value_name("NAME")
                .default_value("PATH")
                .env("ENVPATH_VAR"),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("envpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
