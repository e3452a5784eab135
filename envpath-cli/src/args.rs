//! Argument normalization.
//!
//! envpath has always accepted long flags with a single dash
//! (`-only-count`, `-list-invalid=false`). clap only understands the
//! double-dash form, so such arguments are rewritten before parsing.

use std::ffi::OsString;

use clap::CommandFactory;

use crate::cli::Cli;

/// Rewrite `-name[=value]` to `--name[=value]` when `name` is a long flag.
///
/// The first argument (the program name), short flags, unknown names and
/// everything after a bare `--` are passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let longs = long_flag_names();
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough {
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }
        normalized.push(rewrite_single_dash(arg, &longs));
    }

    normalized
}

fn rewrite_single_dash(arg: OsString, longs: &[String]) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    let Some(rest) = text.strip_prefix('-') else {
        return arg;
    };
    if rest.starts_with('-') {
        return arg;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    if name.chars().count() < 2 || !longs.iter().any(|l| l == name) {
        return arg;
    }
    OsString::from(format!("-{text}"))
}

fn long_flag_names() -> Vec<String> {
    let mut names: Vec<String> = Cli::command()
        .get_arguments()
        .filter_map(|a| a.get_long().map(str::to_string))
        .collect();
    names.extend(["help".to_string(), "version".to_string()]);
    names
}
