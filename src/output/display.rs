//! Display functions for command results

use super::formatters::{colored_guess, plural_guesses, score_bar};
use crate::commands::{BenchmarkResult, SolveResult, TestAllStatistics};
use crate::core::{Word, WordConstraints};
use crate::ranking::Ranking;
use colored::Colorize;
use std::collections::HashMap;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let guess = Word::new(&step.word).map_or_else(
            |_| step.word.to_uppercase(),
            |w| colored_guess(&w, &step.feedback),
        );
        println!("\nTurn {}: {} {}", i + 1, guess, step.feedback.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Score:      {:.2}{}",
                step.score,
                if step.unique_only {
                    " (distinct letters only)"
                } else {
                    ""
                }
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {}!", plural_guesses(result.guesses.len()))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Failed to solve in {}",
                plural_guesses(result.guesses.len())
            )
            .red()
            .bold()
        );
        if let Some(err) = &result.error {
            println!("   {}", err.to_string().red());
        }
    }
}

/// Print the top of a ranking with score bars
pub fn print_ranking(ranking: &Ranking, top: usize) {
    let Some((_, best)) = ranking.get(0) else {
        println!("{}", "No candidates match the hints.".red());
        return;
    };

    println!(
        "\n📋 {} ({} candidates)",
        "Ranked candidates".bright_cyan().bold(),
        ranking.len()
    );
    for (i, (word, score)) in ranking.top(top).iter().enumerate() {
        println!(
            "  {:>3}. {}  {} {:6.2}",
            i + 1,
            word.text().to_uppercase().bright_white().bold(),
            score_bar(*score, best, 20).green(),
            score
        );
    }
    if ranking.len() > top {
        println!("  … and {} more", ranking.len() - top);
    }
}

/// Print what the constraints currently establish
pub fn print_constraints(constraints: &WordConstraints) {
    let pattern: String = constraints
        .positions()
        .iter()
        .map(|p| p.solution().map_or('_', |c| c.to_ascii_uppercase()))
        .collect();
    println!("  Known:    {}", pattern.bright_green().bold());

    let pending: String = constraints.pending().iter().collect();
    if !pending.is_empty() {
        println!("  Misplaced: {}", pending.to_uppercase().yellow());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", percent(result.solved, result.total_words)).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    if result.errors > 0 {
        println!("   Errors:           {}", result.errors.to_string().red());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.total_words);
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solve_rate * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", percent(stats.failed, stats.total_words)).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Avg left (round 1):  {:.3}",
        stats.average_remaining_after_first
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    print_distribution(&stats.guess_distribution, stats.solved);

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words (5+ guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    let mut first_guesses: Vec<(&String, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by_key(|&(word, count)| (std::cmp::Reverse(*count), word.clone()));
    if !first_guesses.is_empty() {
        println!("\n🎯 First Guess Usage");
        for (word, count) in first_guesses.iter().take(5) {
            println!(
                "  {}: {} times ({:.1}%)",
                word.to_uppercase(),
                count,
                percent(**count, stats.total_words)
            );
        }
    }

    if !stats.errors.is_empty() {
        println!(
            "\n⚠️  {} ({})",
            "Errors".red().bold(),
            stats.errors.len()
        );
        for error in stats.errors.iter().take(10) {
            println!("  {error}");
        }
    }
}

fn print_distribution(distribution: &HashMap<usize, usize>, total: usize) {
    let max_count = distribution.values().copied().max().unwrap_or(0);
    let mut keys: Vec<usize> = distribution.keys().copied().collect();
    keys.sort_unstable();
    for guesses in keys {
        let count = distribution[&guesses];
        let bar_len = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!(
            "  {guesses} guesses: {bar} {count:4} ({:5.1}%)",
            percent(count, total)
        );
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
