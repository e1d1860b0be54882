//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter the way the puzzle board shows it
#[must_use]
pub fn colored_letter(letter: char, verdict: Verdict) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Verdict::Exact => tile.black().on_green().bold(),
        Verdict::Present => tile.black().on_yellow().bold(),
        Verdict::Absent => tile.white().on_bright_black(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .zip(feedback.verdicts())
        .map(|(letter, &verdict)| colored_letter(letter, verdict).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score bar scaled against the best score in a ranking
#[must_use]
pub fn score_bar(score: f64, best: f64, width: usize) -> String {
    create_progress_bar(score, best, width)
}

/// "1 guess" / "3 guesses"
#[must_use]
pub fn plural_guesses(n: usize) -> String {
    if n == 1 {
        "1 guess".to_string()
    } else {
        format!("{n} guesses")
    }
}
