//! Reading and splitting search-path lists.

use std::env;
use std::ffi::{OsStr, OsString};

use crate::error::{Error, Result};

use super::types::{PathEntry, PathList};

/// The platform's path-list separator.
#[cfg(windows)]
pub const LIST_SEPARATOR: char = ';';

/// The platform's path-list separator.
#[cfg(not(windows))]
pub const LIST_SEPARATOR: char = ':';

/// The variable inspected when no other is requested.
pub const DEFAULT_VARIABLE: &str = "PATH";

/// Split a path-list value on [`LIST_SEPARATOR`].
///
/// Empty segments are kept, and an empty value yields a single empty entry.
/// The value is split as an OS string, so entries that are not valid
/// unicode keep their exact bytes.
///
/// # Examples
///
/// ```
/// use envpath::path::{split_path_list, LIST_SEPARATOR};
///
/// let value = format!("a{LIST_SEPARATOR}{LIST_SEPARATOR}b");
/// let entries = split_path_list(&value);
/// assert_eq!(entries.len(), 3);
/// assert_eq!(split_path_list("").len(), 1);
/// ```
#[must_use]
pub fn split_path_list<S: AsRef<OsStr> + ?Sized>(value: &S) -> Vec<PathEntry> {
    env::split_paths(value).map(PathEntry::from).collect()
}

/// Join entries with [`LIST_SEPARATOR`].
///
/// # Examples
///
/// ```
/// use envpath::path::{join_path_list, split_path_list, LIST_SEPARATOR};
///
/// let value = format!("/bin{LIST_SEPARATOR}/usr/bin");
/// assert_eq!(join_path_list(&split_path_list(&value)), value.as_str());
/// ```
pub fn join_path_list<'a, I>(entries: I) -> OsString
where
    I: IntoIterator<Item = &'a PathEntry>,
{
    let mut separator = [0; 4];
    let separator: &str = LIST_SEPARATOR.encode_utf8(&mut separator);

    let mut joined = OsString::new();
    for (i, entry) in entries.into_iter().enumerate() {
        if i != 0 {
            joined.push(separator);
        }
        joined.push(entry.as_os_str());
    }
    joined
}

/// Read and split `PATH`.
///
/// An unset variable reads as the empty string, which splits into one empty
/// entry.
#[must_use]
pub fn read_paths() -> PathList {
    read_variable(DEFAULT_VARIABLE)
}

/// Read and split an arbitrary search-path variable.
///
/// # Errors
///
/// Returns [`Error::InvalidVariable`] if `name` is empty or contains `=` or
/// a NUL character, since such names cannot be looked up.
///
/// # Examples
///
/// ```
/// use envpath::path::read_path_list_from;
///
/// assert!(read_path_list_from("").is_err());
/// assert!(read_path_list_from("MANPATH").is_ok());
/// ```
pub fn read_path_list_from(name: &str) -> Result<PathList> {
    validate_variable_name(name)?;
    Ok(read_variable(name))
}

fn read_variable(name: &str) -> PathList {
    let raw = env::var_os(name).unwrap_or_default();
    if raw.to_str().is_none() {
        log::debug!("{name} is not valid unicode; entries are kept as raw OS strings");
    }
    log::debug!("read {name} ({} bytes)", raw.len());
    PathList::parse(name, raw)
}

fn validate_variable_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name.contains('=') {
        "must not contain '='"
    } else if name.contains('\0') {
        "must not contain NUL"
    } else {
        return Ok(());
    };
    Err(Error::InvalidVariable {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
