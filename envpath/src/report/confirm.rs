//! Confirmation providers for the clean-up prompt.
//!
//! The reporter never reads stdin directly; it asks a [`Confirm`]
//! implementation, which tests replace with a scripted answer.

use std::io::{self, BufRead};

/// Interpret a typed answer: `y` or `yes`, any case, surrounding whitespace
/// ignored.
///
/// # Examples
///
/// ```
/// use envpath::report::is_affirmative;
///
/// assert!(is_affirmative("Y"));
/// assert!(is_affirmative(" yes\n"));
/// assert!(!is_affirmative("no"));
/// assert!(!is_affirmative(""));
/// ```
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

/// Something that can answer a yes/no question.
///
/// Any failure to obtain an answer counts as "no".
pub trait Confirm {
    /// Return `true` for an affirmative answer.
    fn confirm(&mut self) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut() -> bool,
{
    fn confirm(&mut self) -> bool {
        self()
    }
}

/// A fixed answer, for tests and `--yes`/`--no-prompt` style callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self) -> bool {
        self.0
    }
}

/// Reads one line from a buffered reader and interprets it.
///
/// End of input and read errors are treated as "no".
///
/// # Examples
///
/// ```
/// use envpath::report::{Confirm, ReaderConfirm};
/// use std::io::Cursor;
///
/// let mut confirm = ReaderConfirm::new(Cursor::new("yes\n"));
/// assert!(confirm.confirm());
///
/// let mut confirm = ReaderConfirm::new(Cursor::new(""));
/// assert!(!confirm.confirm());
/// ```
#[derive(Debug)]
pub struct ReaderConfirm<R> {
    reader: R,
}

impl<R: BufRead> ReaderConfirm<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderConfirm<io::StdinLock<'static>> {
    /// Read answers from standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Confirm for ReaderConfirm<R> {
    fn confirm(&mut self) -> bool {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                log::debug!("confirmation input closed; treating as no");
                false
            }
            Ok(_) => is_affirmative(&line),
            Err(e) => {
                log::warn!("could not read confirmation: {e}; treating as no");
                false
            }
        }
    }
}
