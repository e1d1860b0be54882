//! Test all answers - comprehensive session evaluation
//!
//! Plays every word in the list as the answer and aggregates the outcomes.

use super::solve::{SolveResult, simulate};
use crate::core::Word;
use crate::solver::Session;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Games that stopped abnormally (no candidates, rejected feedback)
    pub errors: Vec<String>,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    /// Guesses per game over every game played
    pub average_guesses: f64,
    /// Fraction of games solved
    pub solve_rate: f64,
    /// Mean candidates left after the first round's feedback
    pub average_remaining_after_first: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(String, usize)>,
    pub first_guess_used: HashMap<String, usize>,
}

/// Play every answer word (or the first `limit`) in parallel
///
/// `progress` draws an indicatif bar on stderr.
#[must_use]
pub fn run_test_all(
    session: &Session,
    answer_words: &[Word],
    limit: Option<usize>,
    progress: bool,
) -> TestAllStatistics {
    let count = limit.map_or(answer_words.len(), |n| n.min(answer_words.len()));
    let test_words = &answer_words[..count];

    let pb = if progress {
        let pb = ProgressBar::new(test_words.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
        pb.set_style(style);
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();
    let results: Vec<SolveResult> = test_words
        .par_iter()
        .map(|answer| {
            let result = simulate(session, answer);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut stats = summarise(&results);
    stats.total_time = total_start.elapsed();
    stats
}

fn summarise(results: &[SolveResult]) -> TestAllStatistics {
    let total_words = results.len();
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let mut first_guess_used: HashMap<String, usize> = HashMap::new();
    let mut errors = Vec::new();
    let mut total_guesses = 0;
    let mut total_remaining = 0;

    for result in results {
        total_guesses += result.guesses.len();
        total_remaining += result.remaining_after_first().unwrap_or(0);
        if result.success {
            *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
        }
        if let Some(first) = result.guesses.first() {
            *first_guess_used.entry(first.word.clone()).or_insert(0) += 1;
        }
        if let Some(err) = &result.error {
            errors.push(format!("{}: {err}", result.target.to_uppercase()));
        }
    }

    let solved: Vec<&SolveResult> = results.iter().filter(|r| r.success).collect();
    let per_game = |total: usize| {
        if total_words == 0 {
            0.0
        } else {
            total as f64 / total_words as f64
        }
    };

    let mut worst_words: Vec<(String, usize)> = solved
        .iter()
        .filter(|r| r.guesses.len() >= 5)
        .map(|r| (r.target.clone(), r.guesses.len()))
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words,
        solved: solved.len(),
        failed: total_words - solved.len(),
        errors,
        guess_distribution,
        total_time: Duration::ZERO,
        average_guesses: per_game(total_guesses),
        solve_rate: per_game(solved.len()),
        average_remaining_after_first: per_game(total_remaining),
        max_guesses: solved.iter().map(|r| r.guesses.len()).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.guesses.len()).min().unwrap_or(0),
        worst_words,
        first_guess_used,
    }
}
