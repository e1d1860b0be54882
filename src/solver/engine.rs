//! Game session: constraints, candidates and guess history for one puzzle

use super::strategy::Strategy;
use crate::core::{Feedback, HintError, Word, WordConstraints};
use crate::ranking::{CandidateRanker, Ranking};
use thiserror::Error;
use tracing::{debug, warn};

/// Guesses allowed in a standard game
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Reasons a round cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Hint(#[from] HintError),

    #[error("the puzzle is already solved")]
    Solved,

    #[error("no rounds left (maximum {0})")]
    OutOfRounds(usize),
}

/// One puzzle in progress
///
/// Keeps the source word list so [`Session::undo`] can rebuild the candidates
/// by replaying the remaining history.
#[derive(Debug, Clone)]
pub struct Session {
    source: Vec<Word>,
    candidates: Vec<Word>,
    constraints: WordConstraints,
    ranker: CandidateRanker,
    strategy: Strategy,
    history: Vec<(Word, Feedback)>,
    max_rounds: usize,
}

impl Session {
    /// Create a new session over `source`
    ///
    /// # Parameters
    /// - `source`: Every word that may be the answer
    /// - `ranker`: Scores candidates
    /// - `strategy`: Decides when suggestions must have distinct letters
    #[must_use]
    pub fn new(source: Vec<Word>, ranker: CandidateRanker, strategy: Strategy) -> Self {
        Self {
            candidates: source.clone(),
            source,
            constraints: WordConstraints::new(),
            ranker,
            strategy,
            history: Vec::new(),
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Override the number of guesses allowed (at least one)
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }

    /// Current round, 1-based
    #[must_use]
    pub fn round(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    #[must_use]
    pub fn rounds_left(&self) -> usize {
        self.max_rounds.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub const fn ranker(&self) -> &CandidateRanker {
        &self.ranker
    }

    /// Words still consistent with every round so far, in source order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn source(&self) -> &[Word] {
        &self.source
    }

    #[must_use]
    pub const fn constraints(&self) -> &WordConstraints {
        &self.constraints
    }

    /// Guesses and their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// True once the last feedback was all exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|(_, f)| f.is_solved())
    }

    /// True when solved or out of rounds
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_solved() || self.rounds_left() == 0
    }

    /// Rank the current candidates for this round
    ///
    /// If the strategy restricts this round to unique words and none qualify,
    /// the unrestricted ranking is returned instead.
    #[must_use]
    pub fn ranking(&self) -> Ranking {
        let unique_only = self.strategy.unique_only(self.round());
        let ranking = self.ranker.rank(&self.candidates, unique_only);
        if unique_only && ranking.is_empty() && !self.candidates.is_empty() {
            debug!(round = self.round(), "no unique candidates, ranking all");
            return self.ranker.rank(&self.candidates, false);
        }
        ranking
    }

    /// The best guess for this round, if any candidate remains
    #[must_use]
    pub fn suggest(&self) -> Option<Word> {
        self.ranking().best().cloned()
    }

    /// Record `feedback` for `guess` and narrow the candidates
    ///
    /// The guess need not be a candidate or even in the source list. On error
    /// the session is unchanged.
    ///
    /// # Errors
    /// - `Solved` / `OutOfRounds` if the game is over
    /// - `Hint` if the feedback contradicts an earlier round
    pub fn apply(&mut self, guess: Word, feedback: Feedback) -> Result<(), SessionError> {
        if self.is_solved() {
            return Err(SessionError::Solved);
        }
        if self.rounds_left() == 0 {
            return Err(SessionError::OutOfRounds(self.max_rounds));
        }

        let mut constraints = self.constraints.clone();
        constraints.update(&guess, &feedback)?;
        self.candidates = constraints.filter(&self.candidates);
        self.constraints = constraints;

        debug!(
            round = self.round(),
            guess = %guess,
            feedback = %feedback,
            remaining = self.candidates.len(),
            "round applied"
        );
        self.history.push((guess, feedback));
        Ok(())
    }

    fn replay(&mut self, history: Vec<(Word, Feedback)>) -> Result<(), SessionError> {
        for (guess, feedback) in history {
            self.apply(guess, feedback)?;
        }
        Ok(())
    }

    /// Take back the last round
    ///
    /// Returns the removed guess and feedback, or `None` at the start of a game.
    pub fn undo(&mut self) -> Option<(Word, Feedback)> {
        let mut history = std::mem::take(&mut self.history);
        let last = history.pop()?;
        self.clear();
        if let Err(err) = self.replay(history) {
            warn!(%err, "undo replay failed, session reset");
            self.clear();
        }
        Some(last)
    }

    /// Start a new game over the same source list
    pub fn reset(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.candidates.clone_from(&self.source);
        self.constraints = WordConstraints::new();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackSymbols;
    use crate::wordlists::words_from_slice;

    fn session(words: &[&str], strategy: Strategy) -> Session {
        Session::new(words_from_slice(words), CandidateRanker::default(), strategy)
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn feedback(text: &str) -> Feedback {
        FeedbackSymbols::default().parse(text).unwrap()
    }

    #[test]
    fn new_session_starts_at_round_one() {
        let s = session(&["crane", "slate"], Strategy::All);
        assert_eq!(s.round(), 1);
        assert_eq!(s.candidates().len(), 2);
        assert_eq!(s.rounds_left(), DEFAULT_MAX_ROUNDS);
        assert!(!s.is_solved());
        assert!(!s.is_over());
    }

    #[test]
    fn apply_narrows_candidates() {
        let mut s = session(&["irate", "crate", "grate", "slate"], Strategy::All);
        let answer = word("grate");
        let guess = word("crate");
        s.apply(guess.clone(), Feedback::calculate(&guess, &answer))
            .unwrap();

        assert_eq!(s.round(), 2);
        let left: Vec<&str> = s.candidates().iter().map(Word::text).collect();
        assert_eq!(left, ["irate", "grate"]);
        assert_eq!(s.suggest(), Some(word("irate")));
    }

    #[test]
    fn solved_session_rejects_more_rounds() {
        let mut s = session(&["crane", "slate"], Strategy::All);
        s.apply(word("slate"), Feedback::SOLVED).unwrap();
        assert!(s.is_solved());
        assert!(s.is_over());
        assert_eq!(
            s.apply(word("crane"), feedback("-----")),
            Err(SessionError::Solved)
        );
    }

    #[test]
    fn rounds_run_out() {
        let mut s = session(&["crane", "slate", "irate"], Strategy::All).with_max_rounds(1);
        s.apply(word("fuzzy"), feedback("-----")).unwrap();
        assert!(s.is_over());
        assert_eq!(
            s.apply(word("fuzzy"), feedback("-----")),
            Err(SessionError::OutOfRounds(1))
        );
    }

    #[test]
    fn failed_apply_leaves_session_untouched() {
        let mut s = session(&["crane", "slate"], Strategy::All);
        s.apply(word("crane"), feedback("g----")).unwrap();
        let before = (s.candidates().to_vec(), s.constraints().clone());

        let err = s.apply(word("slate"), feedback("g----")).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Hint(HintError::AlreadySolved { .. })
        ));
        assert_eq!((s.candidates().to_vec(), s.constraints().clone()), before);
        assert_eq!(s.round(), 2);
    }

    #[test]
    fn undo_restores_previous_round() {
        let mut s = session(&["irate", "crate", "grate", "slate"], Strategy::All);
        let answer = word("grate");
        let first = word("slate");
        s.apply(first.clone(), Feedback::calculate(&first, &answer))
            .unwrap();
        let after_one = s.candidates().to_vec();
        let second = word("crate");
        s.apply(second.clone(), Feedback::calculate(&second, &answer))
            .unwrap();

        let undone = s.undo().map(|(w, _)| w);
        assert_eq!(undone, Some(second));
        assert_eq!(s.candidates(), after_one.as_slice());
        assert_eq!(s.round(), 2);

        assert!(s.undo().is_some());
        assert_eq!(s.candidates().len(), 4);
        assert!(s.undo().is_none());
    }

    #[test]
    fn unique_first_suggests_distinct_letters_first() {
        // "eerie" outscores the rest but repeats letters
        let words = ["eerie", "plumb"];
        let s = session(&words, Strategy::UniqueFirst);
        assert_eq!(s.suggest().map(|w| w.to_string()), Some("plumb".to_string()));

        let s = session(&words, Strategy::All);
        assert_eq!(s.suggest().map(|w| w.to_string()), Some("eerie".to_string()));
    }

    #[test]
    fn unique_falls_back_when_nothing_qualifies() {
        let s = session(&["eerie", "sassy"], Strategy::Unique);
        assert!(s.suggest().is_some());
        assert_eq!(s.ranking().len(), 2);
    }

    #[test]
    fn no_candidates_no_suggestion() {
        let mut s = session(&["crane"], Strategy::All);
        s.apply(word("crane"), feedback("-----")).unwrap();
        assert!(s.candidates().is_empty());
        assert!(s.suggest().is_none());
    }

    #[test]
    fn reset_starts_over() {
        let mut s = session(&["crane", "slate"], Strategy::All);
        s.apply(word("crane"), feedback("-----")).unwrap();
        s.reset();
        assert_eq!(s.round(), 1);
        assert_eq!(s.candidates().len(), 2);
        assert_eq!(s.constraints(), &WordConstraints::new());
    }
}
