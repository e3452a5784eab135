//! The report: counts, listings, and the interactive clean step.
//!
//! A [`Reporter`] is configured once with a [`ReportConfig`], an
//! [`EntryProbe`] and a [`Confirm`] provider, then run against a
//! [`PathList`], writing to any `io::Write`. It never touches the
//! environment: the cleaned value is printed and nothing else.
//!
//! # Examples
//!
//! ```
//! use envpath::path::{EntryStatus, InvalidReason, PathList, LIST_SEPARATOR};
//! use envpath::report::{FixedAnswer, Reporter};
//! use envpath::{PathEntry, ReportConfig};
//!
//! let value = format!("/usr/bin{LIST_SEPARATOR}/nonexistent");
//! let list = PathList::parse("PATH", value);
//! let probe = |e: &PathEntry| {
//!     if e == "/usr/bin" {
//!         EntryStatus::Valid
//!     } else {
//!         EntryStatus::Invalid(InvalidReason::Missing)
//!     }
//! };
//!
//! let mut out = Vec::new();
//! let outcome = Reporter::new(ReportConfig::default(), &probe, FixedAnswer(true))
//!     .run(&list, &mut out)
//!     .unwrap();
//!
//! assert_eq!(outcome.cleaned.unwrap(), "/usr/bin");
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("Found 2 paths\n"));
//! ```

mod config;
mod confirm;

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;
use crate::path::{
    classify_with, ClassifiedPaths, EntryProbe, EntryStatus, InvalidEntry, InvalidReason,
    PathEntry, PathList,
};

pub use config::{PromptPolicy, ReportConfig, ReportMode};
pub use confirm::{is_affirmative, Confirm, FixedAnswer, ReaderConfirm};

/// Identification banner printed by [`ReportMode::About`].
pub const ABOUT_BANNER: &str = concat!(
    "envpath ",
    env!("CARGO_PKG_VERSION"),
    "\nHelper for inspecting the PATH environment variable.\n",
    "Reports entries that are not existing directories and offers a cleaned value.",
);

/// The clean-up question asked after invalid entries were found.
pub const CLEAN_PROMPT: &str = "Do you want the path value without the invalid paths? [y]es/[n]o";

/// What a run did, for callers that want more than the printed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    /// The mode that was run.
    pub mode: ReportMode,
    /// Number of entries in the list.
    pub entries: usize,
    /// The classification, if the mode needed one.
    pub classified: Option<ClassifiedPaths>,
    /// The cleaned value, if it was printed.
    pub cleaned: Option<OsString>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    variable: &'a str,
    count: usize,
    valid: &'a [PathEntry],
    invalid: &'a [InvalidEntry],
}

/// Runs one report.
pub struct Reporter<'p, P: ?Sized, C> {
    config: ReportConfig,
    probe: &'p P,
    confirm: C,
}

impl<'p, P, C> Reporter<'p, P, C>
where
    P: EntryProbe + ?Sized,
    C: Confirm,
{
    /// Create a reporter.
    pub fn new(config: ReportConfig, probe: &'p P, confirm: C) -> Self {
        Self {
            config,
            probe,
            confirm,
        }
    }

    /// The configuration this reporter runs with.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Run the report for `paths`, writing to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails or the JSON report
    /// cannot be serialized. Lookup and confirmation failures are absorbed.
    pub fn run<W: Write + ?Sized>(
        &mut self,
        paths: &PathList,
        out: &mut W,
    ) -> Result<ReportOutcome> {
        let mode = self.config.mode();
        let mut outcome = ReportOutcome {
            mode,
            entries: paths.len(),
            classified: None,
            cleaned: None,
        };

        match mode {
            ReportMode::About => writeln!(out, "{ABOUT_BANNER}")?,
            ReportMode::OnlyCount => write!(out, "{}", paths.len())?,
            ReportMode::OnlyListValid => {
                let classified = self.classify_quietly(paths);
                write_list_no_trailing_newline(out, classified.valid().iter())?;
                outcome.classified = Some(classified);
            }
            ReportMode::OnlyListInvalid => {
                let classified = self.classify_quietly(paths);
                write_list_no_trailing_newline(out, classified.invalid())?;
                outcome.classified = Some(classified);
            }
            ReportMode::Json => {
                let classified = self.classify_quietly(paths);
                let report = JsonReport {
                    variable: paths.variable(),
                    count: paths.len(),
                    valid: classified.valid(),
                    invalid: classified.invalid_entries(),
                };
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
                outcome.classified = Some(classified);
            }
            ReportMode::Full => {
                let (classified, cleaned) = self.run_full(paths, out)?;
                outcome.classified = Some(classified);
                outcome.cleaned = cleaned;
            }
        }

        out.flush()?;
        Ok(outcome)
    }

    fn classify_quietly(&self, paths: &PathList) -> ClassifiedPaths {
        classify_with(paths.entries(), self.probe, |_, _| {})
    }

    fn run_full<W: Write + ?Sized>(
        &mut self,
        paths: &PathList,
        out: &mut W,
    ) -> Result<(ClassifiedPaths, Option<OsString>)> {
        if self.config.count {
            writeln!(out, "Found {} paths", paths.len())?;
        }

        if self.config.list {
            writeln!(out, "Current paths:")?;
            for entry in paths.entries() {
                write_entry_line(out, entry)?;
            }
        }

        // The callback cannot return errors, so the first write failure is
        // held and surfaced once classification finishes.
        let list_invalid = self.config.list_invalid;
        let mut write_result = Ok(());
        let classified = classify_with(paths.entries(), self.probe, |entry, status| {
            if let EntryStatus::Invalid(reason) = status {
                if list_invalid && write_result.is_ok() {
                    write_result = write_invalid_detail(out, entry, reason);
                }
            }
        });
        write_result?;

        if list_invalid {
            writeln!(out, "Invalid paths:")?;
            for entry in classified.invalid() {
                write_entry_line(out, entry)?;
            }
        }

        if !classified.has_invalid() {
            return Ok((classified, None));
        }

        let accepted = match self.config.prompt {
            PromptPolicy::AssumeYes => true,
            PromptPolicy::AssumeNo => false,
            PromptPolicy::Ask => {
                writeln!(out, "{CLEAN_PROMPT}")?;
                out.flush()?;
                self.confirm.confirm()
            }
        };
        if !accepted {
            return Ok((classified, None));
        }

        let cleaned = classified.cleaned_value();
        writeln!(out, "Cleaned {} value:", paths.variable())?;
        write_os(out, &cleaned)?;
        writeln!(out)?;
        Ok((classified, Some(cleaned)))
    }
}

/// Write an entry's exact bytes where the platform allows it, so a value
/// that is not valid unicode survives being copied from the output.
#[cfg(unix)]
fn write_os<W: Write + ?Sized>(out: &mut W, value: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(value.as_bytes())
}

#[cfg(not(unix))]
fn write_os<W: Write + ?Sized>(out: &mut W, value: &OsStr) -> io::Result<()> {
    out.write_all(value.to_string_lossy().as_bytes())
}

fn write_entry_line<W: Write + ?Sized>(out: &mut W, entry: &PathEntry) -> io::Result<()> {
    write_os(out, entry.as_os_str())?;
    writeln!(out)
}

fn write_invalid_detail<W: Write + ?Sized>(
    out: &mut W,
    entry: &PathEntry,
    reason: InvalidReason,
) -> io::Result<()> {
    write!(out, "Invalid path: ")?;
    write_os(out, entry.as_os_str())?;
    writeln!(out, " ({reason})")
}

fn write_list_no_trailing_newline<'a, W, I>(out: &mut W, entries: I) -> Result<()>
where
    W: Write + ?Sized,
    I: Iterator<Item = &'a PathEntry>,
{
    for (i, entry) in entries.enumerate() {
        if i != 0 {
            out.write_all(b"\n")?;
        }
        write_os(out, entry.as_os_str())?;
    }
    Ok(())
}
