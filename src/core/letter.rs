//! Per-position letter facts
//!
//! Each of the five positions in a word tracks either the letter it has been
//! solved to, or the set of letters proven impossible there.

use super::HintError;
use super::word::validate_letter;
use std::fmt;

/// A set of lowercase ASCII letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Every letter `a..=z`
    pub const ALL: Self = Self((1 << 26) - 1);

    /// The empty set
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every letter except `letter`
    #[must_use]
    pub const fn all_except(letter: u8) -> Self {
        Self(Self::ALL.0 & !Self::bit(letter))
    }

    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }

    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        (b'a'..=b'z')
            .filter(move |&b| self.contains(b))
            .map(char::from)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.iter() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Established facts about a single letter position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterConstraint {
    solved: Option<u8>,
    excluded: LetterSet,
}

impl LetterConstraint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule out `letter` at this position
    ///
    /// Idempotent. A solved position already excludes every other letter and
    /// never excludes its own solution, so it is left untouched.
    ///
    /// # Errors
    /// `InvalidValue` if `letter` is not a lowercase ASCII letter.
    pub fn exclude(&mut self, letter: char) -> Result<(), HintError> {
        let letter = validate_letter("letter", letter)?;
        if self.solved.is_none() {
            self.excluded.insert(letter);
        }
        Ok(())
    }

    /// Pin this position to `letter`
    ///
    /// # Errors
    /// - `AlreadySolved` if the position was solved before
    /// - `InvalidValue` if `letter` is not a lowercase ASCII letter
    pub fn solve(&mut self, letter: char) -> Result<(), HintError> {
        if let Some(solved) = self.solved {
            return Err(HintError::AlreadySolved {
                solved: char::from(solved),
                attempted: letter,
            });
        }
        let letter = validate_letter("letter", letter)?;
        self.excluded = LetterSet::all_except(letter);
        self.solved = Some(letter);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved.is_some()
    }

    /// The letter this position was solved to, if any
    #[inline]
    #[must_use]
    pub fn solution(&self) -> Option<char> {
        self.solved.map(char::from)
    }

    /// Whether `letter` (a lowercase ASCII byte) is ruled out here
    #[inline]
    #[must_use]
    pub const fn excludes(&self, letter: u8) -> bool {
        self.excluded.contains(letter)
    }

    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }
}
