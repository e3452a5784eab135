//! Core types for path-list handling.
//!
//! This module defines the values that flow from the reader through the
//! classifier into the report: single entries, the list they were split
//! from, and the valid/invalid partition.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use super::reader::join_path_list;

/// One entry of a search-path list, exactly as it appeared between separators.
///
/// No normalization is applied: casing, trailing separators, relative paths
/// and empty strings are all kept verbatim. The entry holds the OS string
/// itself, so a name that is not valid unicode still reaches the filesystem
/// unchanged; only [`Display`](fmt::Display) and serialization are lossy.
///
/// # Examples
///
/// ```
/// use envpath::PathEntry;
///
/// let entry = PathEntry::from("/usr/local/bin/");
/// assert_eq!(entry, "/usr/local/bin/");
/// assert!(!entry.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathEntry(OsString);

impl PathEntry {
    /// Create an entry from any OS-string-like value.
    #[must_use]
    pub fn new(value: impl Into<OsString>) -> Self {
        Self(value.into())
    }

    /// The entry as an OS string.
    #[must_use]
    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    /// The entry text, if it is valid unicode.
    #[must_use]
    pub fn to_str(&self) -> Option<&str> {
        self.0.to_str()
    }

    /// The entry text, with invalid unicode replaced.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    /// The entry viewed as a filesystem path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Whether this is an empty segment (e.g. from `a::b` or an empty list).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into the underlying `OsString`.
    #[must_use]
    pub fn into_os_string(self) -> OsString {
        self.0
    }
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_string_lossy())
    }
}

impl Serialize for PathEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string_lossy())
    }
}

impl PartialEq<str> for PathEntry {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PathEntry {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for PathEntry {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PathEntry {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&OsStr> for PathEntry {
    fn from(value: &OsStr) -> Self {
        Self(value.to_os_string())
    }
}

impl From<OsString> for PathEntry {
    fn from(value: OsString) -> Self {
        Self(value)
    }
}

impl From<PathBuf> for PathEntry {
    fn from(value: PathBuf) -> Self {
        Self(value.into_os_string())
    }
}

impl AsRef<Path> for PathEntry {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<OsStr> for PathEntry {
    fn as_ref(&self) -> &OsStr {
        &self.0
    }
}

/// The ordered entries of one search-path variable.
///
/// # Examples
///
/// ```
/// use envpath::PathList;
///
/// let list = PathList::parse("PATH", "/bin::/usr/bin");
/// assert_eq!(list.len(), 3);
/// assert!(list.entries()[1].is_empty());
/// assert!(list.is_unicode());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathList {
    variable: String,
    raw: OsString,
    entries: Vec<PathEntry>,
}

impl PathList {
    /// Split `raw` into entries using the platform list separator.
    #[must_use]
    pub fn parse(variable: impl Into<String>, raw: impl Into<OsString>) -> Self {
        let raw = raw.into();
        let entries = super::reader::split_path_list(&raw);
        Self {
            variable: variable.into(),
            raw,
            entries,
        }
    }

    /// Name of the environment variable the list was read from.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The unsplit value.
    #[must_use]
    pub fn raw(&self) -> &OsStr {
        &self.raw
    }

    /// Entries in their original order.
    #[must_use]
    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    /// Number of entries, counting empty segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries at all.
    ///
    /// Lists produced by [`PathList::parse`] always hold at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the value is valid unicode. When it is not, entries are
    /// still probed verbatim but shown lossily.
    #[must_use]
    pub fn is_unicode(&self) -> bool {
        self.raw.to_str().is_some()
    }
}

/// Why an entry is not usable as a search directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The lookup reported that nothing exists at the path.
    Missing,
    /// Something exists at the path but it is not a directory.
    NotADirectory,
    /// The lookup failed for another reason, such as permission denied.
    Inaccessible(io::ErrorKind),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "does not exist"),
            Self::NotADirectory => write!(f, "not a directory"),
            Self::Inaccessible(kind) => write!(f, "cannot be accessed: {kind}"),
        }
    }
}

impl Serialize for InvalidReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An invalid entry together with the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidEntry {
    /// The rejected entry.
    #[serde(rename = "path")]
    pub entry: PathEntry,
    /// Why it was rejected.
    pub reason: InvalidReason,
}

/// The valid/invalid partition of a path list.
///
/// Every entry of the classified list lands in exactly one of the two
/// sequences, and each sequence keeps the original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedPaths {
    pub(crate) valid: Vec<PathEntry>,
    pub(crate) invalid: Vec<InvalidEntry>,
}

impl ClassifiedPaths {
    /// Entries that name existing directories.
    #[must_use]
    pub fn valid(&self) -> &[PathEntry] {
        &self.valid
    }

    /// Rejected entries with their reasons.
    #[must_use]
    pub fn invalid_entries(&self) -> &[InvalidEntry] {
        &self.invalid
    }

    /// Rejected entries without their reasons.
    pub fn invalid(&self) -> impl Iterator<Item = &PathEntry> + '_ {
        self.invalid.iter().map(|i| &i.entry)
    }

    /// Number of classified entries.
    #[must_use]
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// Whether at least one entry was rejected.
    #[must_use]
    pub fn has_invalid(&self) -> bool {
        !self.invalid.is_empty()
    }

    /// The valid entries joined with the platform list separator.
    ///
    /// This is informational; nothing in envpath writes it anywhere but the
    /// report output.
    #[must_use]
    pub fn cleaned_value(&self) -> OsString {
        join_path_list(&self.valid)
    }

    /// Split into `(valid, invalid)` entry sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<PathEntry>, Vec<PathEntry>) {
        let invalid = self.invalid.into_iter().map(|i| i.entry).collect();
        (self.valid, invalid)
    }
}
