//! Rank command
//!
//! Applies hints given on the command line and ranks the surviving candidates.

use crate::core::{Feedback, FeedbackSymbols, HintError, Word};
use crate::ranking::Ranking;
use crate::solver::{Session, SessionError};
use thiserror::Error;

/// Problems with a `GUESS:FEEDBACK` hint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("hint {0:?} is not in GUESS:FEEDBACK form")]
    Malformed(String),

    #[error("hint {hint:?}: {source}")]
    Invalid { hint: String, source: HintError },

    #[error("hint {hint:?}: {source}")]
    Rejected { hint: String, source: SessionError },
}

/// Split `crane:g-y--` into a guess and its feedback
///
/// # Errors
/// `Malformed` without a colon, `Invalid` if either half fails validation.
pub fn parse_hint(hint: &str, symbols: &FeedbackSymbols) -> Result<(Word, Feedback), RankError> {
    let (guess, feedback) = hint
        .split_once(':')
        .ok_or_else(|| RankError::Malformed(hint.to_string()))?;
    let invalid = |source| RankError::Invalid {
        hint: hint.to_string(),
        source,
    };
    let guess = Word::parse(guess).map_err(invalid)?;
    let feedback = symbols.parse(feedback).map_err(invalid)?;
    Ok((guess, feedback))
}

/// Apply every hint in order and rank what is left
///
/// # Errors
/// The first hint that fails to parse or contradicts an earlier one.
pub fn rank_with_hints(
    session: &mut Session,
    hints: &[String],
    symbols: &FeedbackSymbols,
) -> Result<Ranking, RankError> {
    for hint in hints {
        let (guess, feedback) = parse_hint(hint, symbols)?;
        session
            .apply(guess, feedback)
            .map_err(|source| RankError::Rejected {
                hint: hint.clone(),
                source,
            })?;
    }
    Ok(session.ranking())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::ranking::CandidateRanker;
    use crate::solver::Strategy;
    use crate::wordlists::{WORDS, words_from_slice};

    fn session() -> Session {
        Session::new(
            words_from_slice(WORDS),
            CandidateRanker::default(),
            Strategy::All,
        )
    }

    fn hints(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parse_hint_splits_on_colon() {
        let (guess, feedback) = parse_hint("CRANE:g-Y--", &FeedbackSymbols::default()).unwrap();
        assert_eq!(guess.text(), "crane");
        assert_eq!(feedback.verdicts()[2], Verdict::Present);
    }

    #[test]
    fn malformed_and_invalid_hints() {
        let symbols = FeedbackSymbols::default();
        assert_eq!(
            parse_hint("crane", &symbols),
            Err(RankError::Malformed("crane".to_string()))
        );
        assert!(matches!(
            parse_hint("crane:gg", &symbols),
            Err(RankError::Invalid {
                source: HintError::InvalidLength { .. },
                ..
            })
        ));
        assert!(matches!(
            parse_hint("crane:gxggg", &symbols),
            Err(RankError::Invalid {
                source: HintError::InvalidValue { found: 'x', .. },
                ..
            })
        ));
    }

    #[test]
    fn hints_narrow_ranking() {
        let mut s = session();
        let ranking =
            rank_with_hints(&mut s, &hints(&["slate:--ggg"]), &FeedbackSymbols::default())
                .unwrap();
        assert!(!ranking.is_empty());
        assert!(ranking.len() < WORDS.len());
        for (word, _) in ranking.iter() {
            assert!(word.text().ends_with("ate"));
            assert!(!word.has_letter('s') && !word.has_letter('l'));
        }
        assert!(ranking.score_of(&Word::new("crate").unwrap()).is_some());
    }

    #[test]
    fn contradictory_hints_are_rejected() {
        let mut s = session();
        let err = rank_with_hints(
            &mut s,
            &hints(&["crane:g----", "slate:g----"]),
            &FeedbackSymbols::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RankError::Rejected { ref hint, .. } if hint == "slate:g----"));
    }

    #[test]
    fn no_hints_ranks_everything() {
        let mut s = session();
        let ranking = rank_with_hints(&mut s, &[], &FeedbackSymbols::default()).unwrap();
        assert_eq!(ranking.len(), WORDS.len());
    }
}
