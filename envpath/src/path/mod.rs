//! Search-path list reading and classification.
//!
//! # Reading
//!
//! A path-list variable is split on the platform separator
//! ([`LIST_SEPARATOR`]: `:` on POSIX, `;` on Windows). Entries are kept
//! verbatim and in order, including empty segments. An unset or empty
//! variable yields exactly one empty entry.
//!
//! # Classification
//!
//! Each entry is probed once. Entries that name an existing directory are
//! valid; entries that are missing, are not directories, or cannot be looked
//! up at all are invalid. A failed lookup never aborts classification.
//!
//! # Examples
//!
//! ```
//! use envpath::path::{classify_with, EntryStatus, InvalidReason, PathList};
//! use envpath::PathEntry;
//!
//! let list = PathList::parse("PATH", "");
//! let probe = |_: &PathEntry| EntryStatus::Invalid(InvalidReason::Missing);
//! let classified = classify_with(list.entries(), &probe, |_, _| {});
//! assert_eq!(classified.valid().len() + classified.invalid().count(), list.len());
//! ```

mod classify;
mod reader;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use classify::{classify, classify_with, EntryProbe, EntryStatus, FilesystemProbe};
pub use reader::{
    join_path_list, read_path_list_from, read_paths, split_path_list, DEFAULT_VARIABLE,
    LIST_SEPARATOR,
};
pub use types::{ClassifiedPaths, InvalidEntry, InvalidReason, PathEntry, PathList};
