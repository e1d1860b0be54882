//! Whole-word constraints accumulated over a session
//!
//! `WordConstraints` owns one [`LetterConstraint`] per position plus the
//! ordered set of pending letters: letters known to be in the answer that have
//! not yet been pinned to a position.

use super::feedback::{Feedback, FeedbackSymbols, Verdict};
use super::letter::LetterConstraint;
use super::word::WORD_LEN;
use super::{HintError, Word};
use tracing::{debug, trace};

/// Established facts about a single puzzle answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordConstraints {
    positions: [LetterConstraint; WORD_LEN],
    pending: Vec<char>,
}

impl WordConstraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-position constraints in position order
    #[must_use]
    pub const fn positions(&self) -> &[LetterConstraint; WORD_LEN] {
        &self.positions
    }

    /// Letters known to be present but not yet placed, in discovery order
    #[must_use]
    pub fn pending(&self) -> &[char] {
        &self.pending
    }

    /// Solved letters concatenated in position order
    #[must_use]
    pub fn solutions(&self) -> String {
        self.positions
            .iter()
            .filter_map(LetterConstraint::solution)
            .collect()
    }

    /// Whether some position is already solved to `letter`
    fn is_solved_letter(&self, letter: char) -> bool {
        self.positions.iter().any(|p| p.solution() == Some(letter))
    }

    /// True once every position is solved
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.positions.iter().all(LetterConstraint::is_solved)
    }

    /// Exclude `letter` at every unsolved position
    fn exclude_everywhere(&mut self, letter: char) -> Result<(), HintError> {
        for position in &mut self.positions {
            position.exclude(letter)?;
        }
        Ok(())
    }

    /// Ingest one round of feedback for `guess`
    ///
    /// Positions are processed left to right:
    /// - `Absent`: excluded only here if the answer is known to hold the
    ///   letter elsewhere (another copy in this guess is `Exact` or `Present`,
    ///   or the letter is pending or solved), otherwise excluded everywhere
    /// - `Present`: excluded here and added to the pending letters, unless a
    ///   solved position already holds the letter
    /// - `Exact`: position solved and the letter removed from pending
    ///
    /// Re-reporting an already solved position with the same letter is a no-op.
    ///
    /// # Errors
    /// `AlreadySolved` if feedback pins a solved position to a different letter.
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), HintError> {
        let confirmed: Vec<char> = guess
            .letters()
            .zip(feedback.verdicts())
            .filter(|&(_, &verdict)| verdict != Verdict::Absent)
            .map(|(letter, _)| letter)
            .collect();

        for (index, (letter, &verdict)) in guess.letters().zip(feedback.verdicts()).enumerate() {
            match verdict {
                Verdict::Absent => {
                    let elsewhere = confirmed.contains(&letter)
                        || self.pending.contains(&letter)
                        || self.is_solved_letter(letter);
                    if elsewhere {
                        self.positions[index].exclude(letter)?;
                    } else {
                        self.exclude_everywhere(letter)?;
                    }
                }
                Verdict::Present => {
                    self.positions[index].exclude(letter)?;
                    if !self.pending.contains(&letter) && !self.is_solved_letter(letter) {
                        self.pending.push(letter);
                    }
                }
                Verdict::Exact => {
                    let position = &mut self.positions[index];
                    if position.solution() != Some(letter) {
                        position.solve(letter)?;
                    }
                    self.pending.retain(|&p| p != letter);
                }
            }
        }

        debug!(
            guess = %guess,
            feedback = %feedback,
            solved = %self.solutions(),
            pending = %self.pending.iter().collect::<String>(),
            "constraints updated"
        );
        Ok(())
    }

    /// String form of [`WordConstraints::update`]
    ///
    /// # Errors
    /// - `InvalidLength` if `guess` or `feedback` is not five symbols
    /// - `InvalidValue` for a non-letter in `guess` or an unknown feedback symbol
    /// - `AlreadySolved` as for [`WordConstraints::update`]
    pub fn update_str(
        &mut self,
        guess: &str,
        feedback: &str,
        symbols: &FeedbackSymbols,
    ) -> Result<(), HintError> {
        let guess = Word::named("guess", guess)?;
        let feedback = symbols.parse(feedback)?;
        self.update(&guess, &feedback)
    }

    /// Whether `candidate` could still be the answer
    ///
    /// Checks run in order and stop at the first rejection:
    /// 1. No letter sits at a position that excludes it
    /// 2. The candidate has room for every solved and pending letter
    /// 3. Every pending letter appears somewhere in the candidate
    #[must_use]
    pub fn check_word(&self, candidate: &Word) -> bool {
        // Exclusion
        for (index, &letter) in candidate.chars().iter().enumerate() {
            if self.positions[index].excludes(letter) {
                trace!(%candidate, index, "rejected: excluded letter");
                return false;
            }
        }

        // Room
        let solutions = self.solutions();
        let mut remaining: Vec<char> = candidate.letters().collect();
        for letter in solutions.chars().chain(self.pending.iter().copied()) {
            if let Some(found) = remaining.iter().position(|&c| c == letter) {
                remaining.remove(found);
            }
        }
        if self.pending.len() + remaining.len() + solutions.len() > WORD_LEN {
            trace!(%candidate, "rejected: no room for known letters");
            return false;
        }

        // Must-have
        if let Some(missing) = self.pending.iter().find(|&&p| !candidate.has_letter(p)) {
            trace!(%candidate, missing = %missing, "rejected: missing pending letter");
            return false;
        }

        true
    }

    /// String form of [`WordConstraints::check_word`]
    ///
    /// # Errors
    /// `InvalidLength` / `InvalidValue` if `candidate` is not five lowercase letters.
    pub fn check_str(&self, candidate: &str) -> Result<bool, HintError> {
        Ok(self.check_word(&Word::named("candidate", candidate)?))
    }

    /// Words from `source` that pass [`WordConstraints::check_word`], in order
    #[must_use]
    pub fn filter(&self, source: &[Word]) -> Vec<Word> {
        let kept: Vec<Word> = source
            .iter()
            .filter(|word| self.check_word(word))
            .cloned()
            .collect();
        debug!(before = source.len(), after = kept.len(), "filtered candidates");
        kept
    }
}
