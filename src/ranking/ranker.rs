//! Candidate scoring and ordering

use super::LetterWeights;
use crate::core::{HintError, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Scores candidates by letter frequency and orders them best-first
#[derive(Debug, Clone, Default)]
pub struct CandidateRanker {
    weights: LetterWeights,
}

impl CandidateRanker {
    #[must_use]
    pub const fn new(weights: LetterWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub const fn weights(&self) -> &LetterWeights {
        &self.weights
    }

    /// First-letter weight plus the weight of every letter, repeats included
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Word;
    /// use wordle_hints::ranking::CandidateRanker;
    ///
    /// let ranker = CandidateRanker::default();
    /// let crane = ranker.score(&Word::new("crane").unwrap());
    /// let fuzzy = ranker.score(&Word::new("fuzzy").unwrap());
    /// assert!(crane > fuzzy);
    /// ```
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        let chars = word.chars();
        let body: f64 = chars.iter().map(|&b| self.weights.letter(b)).sum();
        self.weights.first(chars[0]) + body
    }

    /// Like [`score`](Self::score) but only for words without repeated letters
    ///
    /// # Errors
    /// `HintError::Count` if any letter repeats.
    pub fn score_unique(&self, word: &Word) -> Result<f64, HintError> {
        if !Self::is_unique(word) {
            return Err(HintError::Count(word.text().to_string()));
        }
        Ok(self.score(word))
    }

    #[inline]
    #[must_use]
    pub fn is_unique(word: &Word) -> bool {
        word.is_unique()
    }

    /// Score every word and sort best-first
    ///
    /// With `unique_only`, words with a repeated letter are left out. A word
    /// listed twice keeps its first position. Equal scores keep input order.
    #[must_use]
    pub fn rank(&self, words: &[Word], unique_only: bool) -> Ranking {
        let mut seen = FxHashSet::default();
        let distinct: Vec<&Word> = words.iter().filter(|w| seen.insert(*w)).collect();

        let mut entries: Vec<(Word, f64)> = distinct
            .par_iter()
            .filter_map(|&word| {
                let score = if unique_only {
                    // Count is a filtering signal, not a failure
                    self.score_unique(word).ok()?
                } else {
                    self.score(word)
                };
                Some((word.clone(), score))
            })
            .collect();

        // Stable, so ties stay in input order
        entries.sort_by(|(_, a), (_, b)| b.total_cmp(a));

        tracing::debug!(
            input = words.len(),
            ranked = entries.len(),
            unique_only,
            "ranked candidates"
        );
        Ranking { entries }
    }
}

/// Candidates ordered by descending score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<(Word, f64)>,
}

impl Ranking {
    /// Highest-scoring word
    #[must_use]
    pub fn best(&self) -> Option<&Word> {
        self.entries.first().map(|(w, _)| w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Word, f64)> {
        self.entries.iter().map(|(w, s)| (w, *s))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<(&Word, f64)> {
        self.entries.get(index).map(|(w, s)| (w, *s))
    }

    /// Score of `word`, if ranked
    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<f64> {
        self.entries.iter().find(|(w, _)| w == word).map(|(_, s)| *s)
    }

    /// The first `n` entries
    #[must_use]
    pub fn top(&self, n: usize) -> &[(Word, f64)] {
        &self.entries[..n.min(self.entries.len())]
    }
}
