//! Letter frequency tables used for scoring
//!
//! Two tables: how often a letter starts a word, and how often it appears at
//! all. Defaults are English-language frequencies in percent.

use std::collections::BTreeMap;
use std::fmt;

/// First-letter frequency (%), `a` through `z`
const DEFAULT_FIRST: [f64; 26] = [
    11.7, 4.4, 5.2, 3.2, 2.8, 4.0, 1.6, 4.2, 7.3, 0.51, 0.86, 2.4, 3.8, 2.3, 7.6, 4.3, 0.22, 2.8,
    6.7, 16.0, 1.2, 0.82, 5.5, 0.045, 0.76, 0.045,
];

/// Overall letter frequency (%), `a` through `z`
const DEFAULT_LETTER: [f64; 26] = [
    8.2, 1.5, 2.8, 4.3, 12.7, 2.2, 2.0, 6.1, 7.0, 0.15, 0.77, 4.0, 2.4, 6.7, 7.5, 1.9, 0.095, 6.0,
    6.3, 9.1, 2.8, 0.98, 2.4, 0.15, 2.0, 0.074,
];

/// Which table a weight belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    First,
    Letter,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Letter => write!(f, "letter"),
        }
    }
}

/// Problems building a weight table from external data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("{table} weight key {key:?} is not a single lowercase letter")]
    BadKey { table: Table, key: String },
    #[error("{table} weight for '{letter}' must be a non-negative number, got {value}")]
    BadValue {
        table: Table,
        letter: char,
        value: f64,
    },
}

/// Read-only letter weight tables
#[derive(Debug, Clone, PartialEq)]
pub struct LetterWeights {
    first: [f64; 26],
    letter: [f64; 26],
}

impl Default for LetterWeights {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST,
            letter: DEFAULT_LETTER,
        }
    }
}

impl LetterWeights {
    /// Start from the defaults and override individual letters
    ///
    /// # Errors
    /// `WeightError` for a key that is not one lowercase letter or a negative /
    /// non-finite weight.
    pub fn with_overrides(
        first: &BTreeMap<String, f64>,
        letter: &BTreeMap<String, f64>,
    ) -> Result<Self, WeightError> {
        let mut weights = Self::default();
        apply(&mut weights.first, Table::First, first)?;
        apply(&mut weights.letter, Table::Letter, letter)?;
        Ok(weights)
    }

    /// Weight of `letter` as the first letter of a word
    #[inline]
    #[must_use]
    pub fn first(&self, letter: u8) -> f64 {
        self.first[usize::from(letter - b'a')]
    }

    /// Weight of `letter` anywhere in a word
    #[inline]
    #[must_use]
    pub fn letter(&self, letter: u8) -> f64 {
        self.letter[usize::from(letter - b'a')]
    }
}

fn apply(
    table: &mut [f64; 26],
    which: Table,
    overrides: &BTreeMap<String, f64>,
) -> Result<(), WeightError> {
    for (key, &value) in overrides {
        let mut chars = key.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => c,
            _ => {
                return Err(WeightError::BadKey {
                    table: which,
                    key: key.clone(),
                });
            }
        };
        if !value.is_finite() || value < 0.0 {
            return Err(WeightError::BadValue {
                table: which,
                letter,
                value,
            });
        }
        table[usize::from(letter as u8 - b'a')] = value;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_non_negative() {
        let weights = LetterWeights::default();
        for letter in b'a'..=b'z' {
            assert!(weights.first(letter) >= 0.0);
            assert!(weights.letter(letter) >= 0.0);
        }
        assert!(weights.letter(b'e') > weights.letter(b'z'));
        assert!(weights.first(b't') > weights.first(b'x'));
    }

    #[test]
    fn overrides_replace_single_letters() {
        let first = BTreeMap::from([("q".to_string(), 50.0)]);
        let letter = BTreeMap::from([("e".to_string(), 0.0)]);
        let weights = LetterWeights::with_overrides(&first, &letter).unwrap();
        assert!((weights.first(b'q') - 50.0).abs() < f64::EPSILON);
        assert!(weights.letter(b'e').abs() < f64::EPSILON);
        assert!((weights.letter(b'a') - 8.2).abs() < f64::EPSILON);
    }

    #[test]
    fn overrides_validate_keys_and_values() {
        let empty = BTreeMap::new();
        let bad_key = BTreeMap::from([("ab".to_string(), 1.0)]);
        assert!(matches!(
            LetterWeights::with_overrides(&bad_key, &empty),
            Err(WeightError::BadKey {
                table: Table::First,
                ..
            })
        ));

        let upper = BTreeMap::from([("E".to_string(), 1.0)]);
        assert!(LetterWeights::with_overrides(&empty, &upper).is_err());

        let negative = BTreeMap::from([("e".to_string(), -1.0)]);
        assert!(matches!(
            LetterWeights::with_overrides(&empty, &negative),
            Err(WeightError::BadValue { letter: 'e', .. })
        ));
    }
}
