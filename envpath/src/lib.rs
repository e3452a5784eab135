#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # envpath
//!
//! A library for inspecting the executable search path.
//!
//! It splits a path-list variable such as `PATH` into its entries, sorts
//! them into valid entries (existing directories) and invalid ones, and
//! renders a report that can offer a cleaned value. The live environment is
//! only ever read.
//!
//! ## Core Types
//!
//! - [`PathList`] and [`PathEntry`]: the split variable and its entries
//! - [`ClassifiedPaths`]: the valid/invalid partition
//! - [`ReportConfig`] and [`Reporter`]: the report and its settings
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use envpath::path::{classify, split_path_list, LIST_SEPARATOR};
//!
//! let dir = std::env::temp_dir();
//! let value = format!("{}{LIST_SEPARATOR}/definitely/not/here", dir.display());
//! let classified = classify(&split_path_list(&value));
//!
//! assert_eq!(classified.valid().len(), 1);
//! assert_eq!(classified.invalid().count(), 1);
//! ```

pub mod error;
pub mod logging;
pub mod path;
pub mod report;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    classify, read_paths, ClassifiedPaths, InvalidReason, PathEntry, PathList, LIST_SEPARATOR,
};
pub use report::{Confirm, PromptPolicy, ReportConfig, ReportMode, ReportOutcome, Reporter};
