//! Candidate word lists
//!
//! The default list is compiled into the binary; custom lists load from disk.

mod embedded;
pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashSet;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::words_from_slice;

/// Words of `source` that are not in `remove`, lowercased, source order kept
///
/// Both sides compare case-insensitively.
///
/// # Examples
/// ```
/// use wordle_hints::wordlists::remove_words;
///
/// let left = remove_words(&["CRANE", "slate", "irate"], &["Slate"]);
/// assert_eq!(left, ["crane", "irate"]);
/// ```
#[must_use]
pub fn remove_words<S: AsRef<str>, R: AsRef<str>>(source: &[S], remove: &[R]) -> Vec<String> {
    let remove: FxHashSet<String> = remove.iter().map(|w| w.as_ref().to_lowercase()).collect();
    source
        .iter()
        .map(|w| w.as_ref().to_lowercase())
        .filter(|w| !remove.contains(w))
        .collect()
}

/// [`remove_words`] for validated words
#[must_use]
pub fn without(source: &[Word], remove: &[Word]) -> Vec<Word> {
    let remove: FxHashSet<&Word> = remove.iter().collect();
    source
        .iter()
        .filter(|w| !remove.contains(w))
        .cloned()
        .collect()
}
