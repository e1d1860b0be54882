//! Error taxonomy for hint tracking and ranking

use thiserror::Error;

/// Errors raised by the core hint engine
///
/// All variants except [`HintError::Count`] signal caller misuse and are
/// terminal for the operation that raised them. `Count` is a filtering signal
/// that the ranker swallows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    /// The value supplied was not text
    #[error("\"{name}\" must be a string, got {found}")]
    InvalidType { name: &'static str, found: String },

    /// The value was not the required number of characters long
    #[error("\"{name}\" is not {expected} characters long (got {actual})")]
    InvalidLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The value contained a character outside the accepted alphabet
    #[error("\"{name}\" contains invalid character {found:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        found: char,
        reason: &'static str,
    },

    /// A position was solved twice with different letters
    #[error("letter already solved as '{solved}', cannot solve as '{attempted}'")]
    AlreadySolved { solved: char, attempted: char },

    /// The word failed a letter-uniqueness filter
    #[error("\"{0}\" is not unique")]
    Count(String),
}

impl HintError {
    /// True for errors that represent malformed input rather than a filtering signal
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::Count(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_parameter() {
        let err = HintError::InvalidLength {
            name: "guess",
            expected: 5,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "\"guess\" is not 5 characters long (got 4)"
        );

        let err = HintError::InvalidValue {
            name: "letter",
            found: 'A',
            reason: "must be lower case",
        };
        assert!(err.to_string().contains("must be lower case"));
    }

    #[test]
    fn count_is_not_an_input_error() {
        assert!(!HintError::Count("sassy".into()).is_input_error());
        assert!(
            HintError::AlreadySolved {
                solved: 'a',
                attempted: 'b'
            }
            .is_input_error()
        );
    }
}
