//! Classification of path-list entries into valid and invalid.
//!
//! The filesystem query sits behind the [`EntryProbe`] trait so tests can
//! classify against a scripted view of the filesystem instead of the real
//! one.

use std::fs;
use std::io;

use super::types::{ClassifiedPaths, InvalidEntry, InvalidReason, PathEntry};

/// Outcome of probing a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// The entry names an existing directory.
    Valid,
    /// The entry cannot serve as a search directory.
    Invalid(InvalidReason),
}

impl EntryStatus {
    /// Whether the entry names an existing directory.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Answers whether an entry names an existing directory.
///
/// Implementations must not fail: anything other than "exists and is a
/// directory" is reported as [`EntryStatus::Invalid`].
///
/// # Examples
///
/// ```
/// use envpath::path::{EntryProbe, EntryStatus, InvalidReason};
/// use envpath::PathEntry;
///
/// let probe = |entry: &PathEntry| {
///     if entry == "/bin" {
///         EntryStatus::Valid
///     } else {
///         EntryStatus::Invalid(InvalidReason::Missing)
///     }
/// };
/// assert!(probe.probe(&PathEntry::from("/bin")).is_valid());
/// ```
pub trait EntryProbe {
    /// Probe one entry.
    fn probe(&self, entry: &PathEntry) -> EntryStatus;
}

impl<F> EntryProbe for F
where
    F: Fn(&PathEntry) -> EntryStatus,
{
    fn probe(&self, entry: &PathEntry) -> EntryStatus {
        self(entry)
    }
}

/// Production probe: one `metadata` call per entry, following symlinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemProbe;

impl EntryProbe for FilesystemProbe {
    fn probe(&self, entry: &PathEntry) -> EntryStatus {
        match fs::metadata(entry.as_path()) {
            Ok(meta) if meta.is_dir() => EntryStatus::Valid,
            Ok(_) => EntryStatus::Invalid(InvalidReason::NotADirectory),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                EntryStatus::Invalid(InvalidReason::Missing)
            }
            Err(e) => {
                log::debug!("lookup of '{entry}' failed: {e}");
                EntryStatus::Invalid(InvalidReason::Inaccessible(e.kind()))
            }
        }
    }
}

/// Classify entries against the real filesystem.
///
/// # Examples
///
/// ```
/// use envpath::path::{classify, split_path_list};
///
/// let entries = split_path_list("");
/// let classified = classify(&entries);
/// assert_eq!(classified.total(), 1);
/// assert!(classified.has_invalid());
/// ```
#[must_use]
pub fn classify(entries: &[PathEntry]) -> ClassifiedPaths {
    classify_with(entries, &FilesystemProbe, |_, _| {})
}

/// Classify entries with `probe`, calling `on_entry` for each entry in order.
///
/// The callback sees each entry as soon as its status is known, which lets a
/// caller report invalid entries while classification is still running.
pub fn classify_with<P, F>(entries: &[PathEntry], probe: &P, mut on_entry: F) -> ClassifiedPaths
where
    P: EntryProbe + ?Sized,
    F: FnMut(&PathEntry, EntryStatus),
{
    let mut classified = ClassifiedPaths::default();
    for entry in entries {
        let status = probe.probe(entry);
        on_entry(entry, status);
        match status {
            EntryStatus::Valid => classified.valid.push(entry.clone()),
            EntryStatus::Invalid(reason) => classified.invalid.push(InvalidEntry {
                entry: entry.clone(),
                reason,
            }),
        }
    }
    classified
}
