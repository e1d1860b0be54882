//! Word list loading utilities
//!
//! Load candidate words from a file, or convert the embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file, one per line
///
/// Blank lines and `#` comments are ignored. Lines that are not a valid word
/// (wrong length, non-letters, not UTF-8) are skipped with a warning. Words
/// are trimmed and lowercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_hints::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read(path)?;
    let words = words_from_bytes(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse newline-separated raw bytes into words
#[must_use]
pub fn words_from_bytes(content: &[u8]) -> Vec<Word> {
    content
        .split(|&b| b == b'\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim_ascii();
            if trimmed.is_empty() || trimmed.starts_with(b"#") {
                return None;
            }
            match Word::from_bytes(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    warn!(line = index + 1, %err, "skipping word list entry");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_hints::wordlists::loader::words_from_slice;
/// use wordle_hints::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
