//! Word solving command
//!
//! Plays a game against a known answer, always taking the top-ranked guess.

use crate::core::{Feedback, HintError, Word};
use crate::solver::{DEFAULT_MAX_ROUNDS, Session, SessionError};
use thiserror::Error;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Reasons a target cannot be solved at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] HintError),

    #[error("\"{0}\" is not in the word list")]
    NotInWordList(String),
}

/// Why a simulated game stopped before it was solved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("no candidates left in round {round}")]
    Exhausted { round: usize },

    #[error("round {round} rejected: {source}")]
    Rejected { round: usize, source: SessionError },
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
    /// Set when the game ended abnormally rather than by running out of rounds
    pub error: Option<SimulationError>,
}

impl SolveResult {
    /// Candidates left after the first round's feedback
    #[must_use]
    pub fn remaining_after_first(&self) -> Option<usize> {
        self.guesses.first().map(|step| step.candidates_after)
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub score: f64,
    /// Whether the ranking this round was restricted to distinct letters
    pub unique_only: bool,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word, starting from a fresh copy of `session`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The target is not one of the session's source words
pub fn solve_word(config: &SolveConfig, session: &Session) -> Result<SolveResult, SolveError> {
    let target = Word::parse(&config.target)?;
    if !session.source().contains(&target) {
        return Err(SolveError::NotInWordList(target.to_string()));
    }

    let mut game = session.clone().with_max_rounds(config.max_guesses);
    game.reset();
    Ok(play_out(game, &target))
}

/// Play a fresh game from `template` against `answer`
///
/// Used by the batch commands; the answer need not be in the word list.
#[must_use]
pub fn simulate(template: &Session, answer: &Word) -> SolveResult {
    let mut game = template.clone();
    game.reset();
    play_out(game, answer)
}

fn play_out(mut game: Session, answer: &Word) -> SolveResult {
    let mut guesses = Vec::new();
    let mut error = None;

    while !game.is_over() {
        let round = game.round();
        let candidates_before = game.candidates().len();
        let unique_only = game.strategy().unique_only(round);

        let ranking = game.ranking();
        let Some((best, score)) = ranking.get(0) else {
            error = Some(SimulationError::Exhausted { round });
            break;
        };
        let guess = best.clone();
        let feedback = Feedback::calculate(&guess, answer);

        if let Err(source) = game.apply(guess.clone(), feedback) {
            error = Some(SimulationError::Rejected { round, source });
            break;
        }

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            score,
            unique_only,
            candidates_before,
            candidates_after: game.candidates().len(),
        });
    }

    if let Some(err) = &error {
        tracing::debug!(answer = %answer, %err, "simulation stopped early");
    }

    SolveResult {
        success: game.is_solved(),
        guesses,
        target: answer.text().to_string(),
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::CandidateRanker;
    use crate::solver::Strategy;
    use crate::wordlists::{WORDS, words_from_slice};

    fn session(strategy: Strategy) -> Session {
        Session::new(
            words_from_slice(WORDS),
            CandidateRanker::default(),
            strategy,
        )
    }

    #[test]
    fn solve_word_records_each_round() {
        let result = solve_word(
            &SolveConfig::new("robot".to_string()),
            &session(Strategy::UniqueFirst),
        )
        .unwrap();

        assert!(!result.guesses.is_empty());
        assert!(result.guesses.len() <= DEFAULT_MAX_ROUNDS);
        assert!(result.error.is_none());
        assert!(result.guesses[0].unique_only);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        if result.success {
            assert_eq!(result.guesses.last().map(|s| s.word.as_str()), Some("robot"));
        }
    }

    #[test]
    fn target_is_normalised() {
        let result = solve_word(
            &SolveConfig::new("  ROBOT ".to_string()),
            &session(Strategy::All),
        )
        .unwrap();
        assert_eq!(result.target, "robot");
    }

    #[test]
    fn invalid_target_returns_error() {
        let s = session(Strategy::All);
        assert!(matches!(
            solve_word(&SolveConfig::new("toolong".to_string()), &s),
            Err(SolveError::InvalidTarget(HintError::InvalidLength { .. }))
        ));
        assert_eq!(
            solve_word(&SolveConfig::new("qqqqq".to_string()), &s).unwrap_err(),
            SolveError::NotInWordList("qqqqq".to_string())
        );
    }

    #[test]
    fn max_guesses_is_respected() {
        let mut config = SolveConfig::new("robot".to_string());
        config.max_guesses = 1;
        let result = solve_word(&config, &session(Strategy::All)).unwrap();
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn simulate_reports_exhaustion_for_unknown_answer() {
        let s = Session::new(
            words_from_slice(&["crane", "slate"]),
            CandidateRanker::default(),
            Strategy::All,
        );
        let answer = Word::new("fuzzy").unwrap();
        let result = simulate(&s, &answer);
        assert!(!result.success);
        assert!(matches!(
            result.error,
            Some(SimulationError::Exhausted { .. })
        ));
    }

    #[test]
    fn single_candidate_solves_first_round() {
        let s = Session::new(
            words_from_slice(&["crane"]),
            CandidateRanker::default(),
            Strategy::Unique,
        );
        let result = simulate(&s, &Word::new("crane").unwrap());
        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.remaining_after_first(), Some(1));
    }
}
