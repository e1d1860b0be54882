//! Simple interactive CLI mode
//!
//! Line-oriented prompt loop: the player types the guess they entered in the
//! puzzle (or accepts the suggestion) and then the feedback they got back.

use crate::core::{Feedback, FeedbackSymbols, Word};
use crate::output::formatters::{colored_guess, plural_guesses};
use crate::solver::Session;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player asked for at a prompt
enum Input<T> {
    Value(T),
    Undo,
    New,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: Session, symbols: FeedbackSymbols) -> io::Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, symbols, stdin.lock(), io::stdout())
}

/// Prompt loop over any reader and writer
///
/// End of input ends the session like `quit`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    mut session: Session,
    symbols: FeedbackSymbols,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "\n{}", "Wordle Hints - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "Type the word you entered, or press enter to use the suggestion.")?;
    writeln!(out, "Then type the feedback ({}), or 'win'.", symbols.legend())?;
    writeln!(out, "Commands: 'undo', 'new', 'quit'\n")?;

    loop {
        if session.is_over() {
            report_game_over(&session, &mut out)?;
            let again = prompt(&mut input, &mut out, "Play again? (yes/no)")?
                .is_some_and(|answer| matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"));
            if !again {
                break;
            }
            session.reset();
            writeln!(out, "\n🔄 New game started!\n")?;
            continue;
        }

        let ranking = session.ranking();
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Round {} of {}: {} candidates remaining",
            session.round(),
            session.max_rounds(),
            session.candidates().len()
        )?;
        writeln!(out, "{}", "─".repeat(60))?;

        let suggestion = ranking.best().cloned();
        match &suggestion {
            Some(best) => {
                writeln!(
                    out,
                    "\n📊 Suggested guess: {}",
                    best.text().to_uppercase().bright_yellow().bold()
                )?;
                if ranking.len() > 1 && ranking.len() <= 10 {
                    let others: Vec<String> = ranking
                        .iter()
                        .skip(1)
                        .map(|(w, _)| w.text().to_uppercase())
                        .collect();
                    writeln!(out, "   Also possible: {}", others.join(", "))?;
                }
            }
            None => {
                writeln!(
                    out,
                    "\n❌ No candidates remain! The feedback may be incorrect."
                )?;
                writeln!(out, "Type 'undo' to go back, or 'new' to start over.")?;
            }
        }
        writeln!(out)?;

        let guess = match read_guess(&mut input, &mut out, suggestion.as_ref())? {
            Input::Value(guess) => guess,
            Input::Undo => {
                undo(&mut session, &mut out)?;
                continue;
            }
            Input::New => {
                session.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            Input::Quit => break,
        };

        let feedback = match read_feedback(&mut input, &mut out, &symbols)? {
            Input::Value(feedback) => feedback,
            Input::Undo => {
                writeln!(out, "Guess discarded.\n")?;
                continue;
            }
            Input::New => {
                session.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            Input::Quit => break,
        };

        match session.apply(guess.clone(), feedback) {
            Ok(()) => writeln!(out, "  {}\n", colored_guess(&guess, &feedback))?,
            Err(err) => writeln!(out, "❌ {err}\n")?,
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn report_game_over<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let rounds = session.history().len();
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    if session.is_solved() {
        writeln!(
            out,
            "{}",
            format!("🎉 Solved in {}!", plural_guesses(rounds))
                .bright_green()
                .bold()
        )?;
    } else {
        writeln!(
            out,
            "{}",
            format!("Out of guesses after {}.", plural_guesses(rounds)).red()
        )?;
    }
    for (i, (word, feedback)) in session.history().iter().enumerate() {
        writeln!(
            out,
            "  {}. {} {}",
            i + 1,
            colored_guess(word, feedback),
            feedback.to_emoji()
        )?;
    }
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())
}

fn undo<W: Write>(session: &mut Session, out: &mut W) -> io::Result<()> {
    match session.undo() {
        Some((word, _)) => writeln!(
            out,
            "✓ Undid {}. Back to round {}\n",
            word.text().to_uppercase(),
            session.round()
        ),
        None => writeln!(out, "Nothing to undo!\n"),
    }
}

fn command<T>(text: &str) -> Option<Input<T>> {
    match text.trim().to_lowercase().as_str() {
        "undo" | "u" => Some(Input::Undo),
        "new" | "n" => Some(Input::New),
        "quit" | "q" | "exit" => Some(Input::Quit),
        _ => None,
    }
}

fn read_guess<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    suggestion: Option<&Word>,
) -> io::Result<Input<Word>> {
    loop {
        let Some(line) = prompt(input, out, "Guess")? else {
            return Ok(Input::Quit);
        };
        if let Some(cmd) = command(&line) {
            return Ok(cmd);
        }
        if line.trim().is_empty() {
            if let Some(word) = suggestion {
                return Ok(Input::Value(word.clone()));
            }
            continue;
        }
        match Word::parse(&line) {
            Ok(word) => return Ok(Input::Value(word)),
            Err(err) => writeln!(out, "❌ {err}\n")?,
        }
    }
}

fn read_feedback<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    symbols: &FeedbackSymbols,
) -> io::Result<Input<Feedback>> {
    loop {
        let Some(line) = prompt(input, out, "Feedback")? else {
            return Ok(Input::Quit);
        };
        if let Some(cmd) = command(&line) {
            return Ok(cmd);
        }
        if matches!(line.trim().to_lowercase().as_str(), "win" | "solved") {
            return Ok(Input::Value(Feedback::SOLVED));
        }
        // Only the line ending is stripped: a space may be a feedback symbol
        match symbols.parse(&line) {
            Ok(feedback) => return Ok(Input::Value(feedback)),
            Err(err) => writeln!(out, "❌ {err}\n")?,
        }
    }
}

/// Read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::CandidateRanker;
    use crate::solver::Strategy;
    use crate::wordlists::words_from_slice;

    fn run(words: &[&str], symbols: FeedbackSymbols, script: &str) -> String {
        colored::control::set_override(false);
        let session = Session::new(
            words_from_slice(words),
            CandidateRanker::default(),
            Strategy::All,
        );
        let mut out = Vec::new();
        run_simple_with(session, symbols, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn accepts_suggestion_and_wins() {
        let out = run(&["crane", "slate"], FeedbackSymbols::default(), "\nwin\nno\n");
        assert!(out.contains("Suggested guess: SLATE"));
        assert!(out.contains("Solved in 1 guess!"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn typed_guess_narrows_candidates() {
        let out = run(
            &["irate", "crate", "grate", "slate"],
            FeedbackSymbols::default(),
            "crate\n-gggg\nquit\n",
        );
        assert!(out.contains("Round 2 of 6: 2 candidates remaining"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let out = run(
            &["crane", "slate"],
            FeedbackSymbols::default(),
            "cr4ne\nslate\nggg\nggggg\nno\n",
        );
        assert!(out.contains("invalid character '4'"));
        assert!(out.contains("\"feedback\" is not 5 characters long"));
        assert!(out.contains("Solved in 1 guess!"));
    }

    #[test]
    fn space_can_be_a_feedback_symbol() {
        let symbols = FeedbackSymbols::new('g', 'y', ' ').unwrap();
        let out = run(&["crane", "slate", "fuzzy"], symbols, "fuzzy\n     \nquit\n");
        assert!(out.contains("Round 2 of 6: 2 candidates remaining"));
    }

    #[test]
    fn undo_and_new_game() {
        let out = run(
            &["crane", "slate"],
            FeedbackSymbols::default(),
            "crane\n-----\nundo\nundo\nnew\nquit\n",
        );
        assert!(out.contains("Undid CRANE. Back to round 1"));
        assert!(out.contains("Nothing to undo!"));
        assert!(out.contains("New game started"));
    }

    #[test]
    fn end_of_input_quits() {
        let out = run(&["crane"], FeedbackSymbols::default(), "");
        assert!(out.contains("Thanks for playing"));
    }
}
