//! Benchmark command
//!
//! Plays a random sample of answers and summarises how the session performs.

use super::solve::simulate;
use crate::core::Word;
use crate::solver::Session;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub errors: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games keyed by guesses taken
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct words from `source`
///
/// With a seed the sample is reproducible; otherwise it comes from the thread RNG.
#[must_use]
pub fn sample_words(source: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            source.choose_multiple(&mut rng, count).cloned().collect()
        }
        None => source
            .choose_multiple(&mut rand::rng(), count)
            .cloned()
            .collect(),
    }
}

/// Run benchmark on a set of target words
pub fn run_benchmark(session: &Session, target_words: &[Word]) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut errors = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for target in target_words {
        let result = simulate(session, target);
        let guesses = result.guesses.len();

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        if result.success {
            solved += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        }
        if result.error.is_some() {
            errors += 1;
        }
    }

    let duration = start.elapsed();
    let total_words = target_words.len();

    BenchmarkResult {
        total_words,
        solved,
        errors,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::CandidateRanker;
    use crate::solver::Strategy;
    use crate::wordlists::{WORDS, words_from_slice};

    fn session() -> Session {
        Session::new(
            words_from_slice(WORDS),
            CandidateRanker::default(),
            Strategy::UniqueFirst,
        )
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let words = words_from_slice(WORDS);
        let a = sample_words(&words, 10, Some(7));
        let b = sample_words(&words, 10, Some(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);

        let distinct: std::collections::HashSet<&Word> = a.iter().collect();
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn sample_larger_than_source_takes_everything() {
        let words = words_from_slice(&["crane", "slate"]);
        assert_eq!(sample_words(&words, 10, None).len(), 2);
    }

    #[test]
    fn benchmark_runs() {
        let words = words_from_slice(WORDS);
        let sample = sample_words(&words, 10, Some(42));
        let result = run_benchmark(&session(), &sample);

        assert_eq!(result.total_words, 10);
        assert!(result.total_guesses >= 10);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
        assert_eq!(result.errors, 0);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let result = run_benchmark(&session(), &[]);
        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
