//! Five-letter word representation
//!
//! A `Word` is a validated, lowercase, five-letter ASCII word stored as bytes.

use super::HintError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every puzzle word
pub const WORD_LEN: usize = 5;

/// A validated five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

impl Word {
    /// Create a word from text that is already lowercase
    ///
    /// # Errors
    /// Returns `HintError` if:
    /// - Length is not exactly 5 characters (`InvalidLength`)
    /// - Any character is upper case or outside `a..=z` (`InvalidValue`)
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("CRANE").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, HintError> {
        Self::named("word", text)
    }

    /// Create a word from user-facing text, trimming whitespace and folding case
    ///
    /// # Errors
    /// Same as [`Word::new`] after normalisation.
    pub fn parse(text: &str) -> Result<Self, HintError> {
        Self::new(&text.trim().to_lowercase())
    }

    /// Create a word from raw bytes
    ///
    /// # Errors
    /// Returns `InvalidType` if the bytes are not UTF-8 text, otherwise the
    /// same errors as [`Word::parse`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HintError> {
        let text = std::str::from_utf8(bytes).map_err(|_| HintError::InvalidType {
            name: "word",
            found: format!("{} non-UTF-8 bytes", bytes.len()),
        })?;
        Self::parse(text)
    }

    /// Validate `text` and report failures under the parameter name `name`
    pub(crate) fn named(name: &'static str, text: &str) -> Result<Self, HintError> {
        let actual = text.chars().count();
        if actual != WORD_LEN {
            return Err(HintError::InvalidLength {
                name,
                expected: WORD_LEN,
                actual,
            });
        }

        let mut chars = [0u8; WORD_LEN];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            *slot = validate_letter(name, ch)?;
        }

        Ok(Self {
            text: text.to_string(),
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position] as char
    }

    /// Iterate over the letters in position order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().map(|&b| b as char)
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters().any(|c| c == letter)
    }

    /// True iff no letter repeats
    #[must_use]
    pub fn is_unique(&self) -> bool {
        let mut seen = 0u32;
        for &b in &self.chars {
            let bit = 1 << (b - b'a');
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        true
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

/// Check that `ch` is a single lowercase ASCII letter and return its byte
pub(crate) fn validate_letter(name: &'static str, ch: char) -> Result<u8, HintError> {
    if ch.is_ascii_lowercase() {
        // ASCII, so the cast is lossless
        return Ok(ch as u8);
    }
    let reason = if ch.is_uppercase() {
        "must be lower case"
    } else {
        "is not in the alphabet"
    };
    Err(HintError::InvalidValue {
        name,
        found: ch,
        reason,
    })
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_new_rejects_upper_case() {
        assert!(matches!(
            Word::new("Crane"),
            Err(HintError::InvalidValue {
                found: 'C',
                reason: "must be lower case",
                ..
            })
        ));
    }

    #[test]
    fn word_parse_normalizes() {
        assert_eq!(Word::parse("  CrAnE \n").unwrap().text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        for (text, len) in [("", 0), ("b", 1), ("bean", 4), ("beeeen", 6)] {
            assert_eq!(
                Word::new(text),
                Err(HintError::InvalidLength {
                    name: "word",
                    expected: 5,
                    actual: len,
                })
            );
        }
        let long = "b".repeat(117);
        assert!(matches!(
            Word::new(&long),
            Err(HintError::InvalidLength { actual: 117, .. })
        ));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // Five characters, so the failure is about the alphabet
        assert!(matches!(
            Word::new("héllo"),
            Err(HintError::InvalidValue { found: 'é', .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err());
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
    }

    #[test]
    fn word_from_bytes_requires_text() {
        assert!(matches!(
            Word::from_bytes(&[0xff, 0xfe, 0x41, 0x42, 0x43]),
            Err(HintError::InvalidType { .. })
        ));
        assert_eq!(Word::from_bytes(b"beans").unwrap().text(), "beans");
    }

    #[test]
    fn word_char_at_and_has_letter() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), 'c');
        assert_eq!(word.char_at(4), 'e');
        assert!(word.has_letter('a'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_uniqueness() {
        assert!(Word::new("crane").unwrap().is_unique());
        assert!(!Word::new("sassy").unwrap().is_unique());
        assert!(!Word::new("speed").unwrap().is_unique());
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
