//! TUI application state and logic

use crate::core::{Feedback, FeedbackSymbols, Verdict, WORD_LEN, Word};
use crate::ranking::Ranking;
use crate::solver::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Messages kept in the side panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub symbols: FeedbackSymbols,
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<GuessInfo>,
    /// Ranking of the current round's candidates
    pub ranking: Ranking,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    WinCelebration,
    OutOfGuesses,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Word,
    pub feedback: Feedback,
    /// Ranker score of the guess, if it was a candidate
    pub score: Option<f64>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub word: Word,
    pub score: Option<f64>,
    /// 1-based position in the current ranking
    pub rank: Option<usize>,
    /// Typed by the player rather than suggested
    pub manual: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by guess count
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, won: bool, guesses: usize) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session, symbols: FeedbackSymbols) -> Self {
        let mut app = Self {
            session,
            symbols,
            history: Vec::new(),
            current_guess: None,
            ranking: Ranking::default(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_word: String::new(),
        };
        app.add_message(
            "Welcome! I'll suggest guesses ranked by letter frequency.",
            MessageStyle::Info,
        );
        let hint = format!("Enter feedback ({}) or emoji tiles", app.symbols.legend());
        app.add_message(&hint, MessageStyle::Info);
        app.compute_suggestion();
        app
    }

    /// Re-rank the candidates and pick the top word
    pub fn compute_suggestion(&mut self) {
        self.ranking = self.session.ranking();
        self.current_guess = self.ranking.get(0).map(|(word, score)| GuessInfo {
            word: word.clone(),
            score: Some(score),
            rank: Some(1),
            manual: false,
        });
        if self.current_guess.is_none() {
            self.add_message("No valid guesses remaining!", MessageStyle::Error);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.candidates().len()
    }

    /// Apply typed feedback to the current guess
    pub fn handle_feedback(&mut self, input: &str) {
        let Some(guess) = self.current_guess.clone() else {
            self.add_message("No guess to give feedback for!", MessageStyle::Error);
            return;
        };
        let feedback = match parse_feedback(input.trim(), &self.symbols) {
            Ok(feedback) => feedback,
            Err(msg) => {
                self.add_message(&msg, MessageStyle::Error);
                return;
            }
        };

        let candidates_before = self.candidates_count();
        if let Err(err) = self.session.apply(guess.word.clone(), feedback) {
            self.add_message(&format!("Rejected: {err}"), MessageStyle::Error);
            return;
        }
        let candidates_after = self.candidates_count();
        debug!(guess = %guess.word, %feedback, candidates_after, "tui round applied");

        self.history.push(HistoryEntry {
            guess: guess.word,
            feedback,
            score: guess.score,
            candidates_before,
            candidates_after,
        });
        self.input_buffer.clear();

        let guesses = self.history.len();
        if self.session.is_solved() {
            self.stats.record(true, guesses);
            self.input_mode = InputMode::WinCelebration;
            self.current_guess = None;
            let celebration = match guesses {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                6 => "😅 PHEW! Got it in six! 😅",
                _ => "🎊 SOLVED! 🎊",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if self.session.is_over() {
            self.stats.record(false, guesses);
            self.input_mode = InputMode::OutOfGuesses;
            self.current_guess = None;
            self.add_message(
                &format!("Out of guesses after {guesses} rounds."),
                MessageStyle::Error,
            );
            self.add_message(
                "Press 'u' to undo, 'n' for new game or 'q' to quit.",
                MessageStyle::Info,
            );
        } else if candidates_after == 0 {
            self.compute_suggestion();
            self.add_message(
                "No candidates remain - feedback may be incorrect. Press 'u' to undo.",
                MessageStyle::Error,
            );
        } else {
            self.compute_suggestion();
            self.add_message(
                &format!("{candidates_after} candidates remaining"),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.history.clear();
        self.input_buffer.clear();
        self.manual_word.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if self.session.undo().is_some() {
            // A finished game that gets undone no longer counts
            if matches!(
                self.input_mode,
                InputMode::WinCelebration | InputMode::OutOfGuesses
            ) {
                self.unrecord_last_game();
            }
            self.history.pop();
            self.input_mode = InputMode::Feedback;
            self.input_buffer.clear();
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    fn unrecord_last_game(&mut self) {
        let guesses = self.history.len();
        self.stats.total_games = self.stats.total_games.saturating_sub(1);
        if self.input_mode == InputMode::WinCelebration {
            self.stats.games_won = self.stats.games_won.saturating_sub(1);
            if let Some(count) = self.stats.guess_distribution.get_mut(guesses) {
                *count = count.saturating_sub(1);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Make the typed word the current guess
    ///
    /// Any well-formed word is accepted; the puzzle may allow guesses this
    /// word list does not contain.
    pub fn use_manual_word(&mut self) {
        let word = match Word::parse(&self.manual_word) {
            Ok(word) => word,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let rank = self.ranking.iter().position(|(w, _)| *w == word);
        let score = self.ranking.score_of(&word);
        match (rank, score) {
            (Some(i), Some(score)) => self.add_message(
                &format!(
                    "Using: {} (rank {} of {}, score {score:.2})",
                    word.text().to_uppercase(),
                    i + 1,
                    self.ranking.len()
                ),
                MessageStyle::Success,
            ),
            _ => self.add_message(
                &format!(
                    "Using: {} (not a remaining candidate)",
                    word.text().to_uppercase()
                ),
                MessageStyle::Info,
            ),
        }

        self.current_guess = Some(GuessInfo {
            word,
            score,
            rank: rank.map(|i| i + 1),
            manual: true,
        });
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration | InputMode::OutOfGuesses => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                // Feedback symbols win over the single-key commands
                KeyCode::Char(c) if self.is_feedback_char(c) => self.input_buffer.push(c),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::ManualWord;
                    self.add_message("Enter your own word (5 letters)", MessageStyle::Info);
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualWord => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                    self.add_message("Cancelled manual word entry", MessageStyle::Info);
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                }
                KeyCode::Char(c) => {
                    if self.manual_word.len() < WORD_LEN && c.is_ascii_alphabetic() {
                        self.manual_word.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.manual_word.pop();
                }
                KeyCode::Enter => {
                    if self.manual_word.len() == WORD_LEN {
                        self.use_manual_word();
                    } else {
                        self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                    }
                }
                _ => {}
            },
        }
    }

    fn is_feedback_char(&self, c: char) -> bool {
        self.symbols.verdict(c).is_some() || emoji_verdict(c).is_some()
    }
}

fn emoji_verdict(c: char) -> Option<Verdict> {
    match c {
        '🟩' => Some(Verdict::Exact),
        '🟨' => Some(Verdict::Present),
        '⬜' | '⬛' => Some(Verdict::Absent),
        _ => None,
    }
}

/// Feedback in the configured symbols, or as emoji tiles
fn parse_feedback(input: &str, symbols: &FeedbackSymbols) -> Result<Feedback, String> {
    if input.chars().any(|c| emoji_verdict(c).is_some()) {
        let verdicts: Option<Vec<Verdict>> = input.chars().map(emoji_verdict).collect();
        let verdicts: [Verdict; WORD_LEN] = verdicts
            .and_then(|v| v.try_into().ok())
            .ok_or_else(|| "Feedback needs exactly 5 tiles: 🟩 🟨 ⬜".to_string())?;
        return Ok(Feedback::new(verdicts));
    }
    symbols.parse(input).map_err(|err| err.to_string())
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::CandidateRanker;
    use crate::solver::Strategy;
    use crate::wordlists::words_from_slice;

    fn app(words: &[&str]) -> App {
        let session = Session::new(
            words_from_slice(words),
            CandidateRanker::default(),
            Strategy::All,
        );
        App::new(session, FeedbackSymbols::default())
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn starts_with_top_ranked_suggestion() {
        let app = app(&["crane", "slate", "fuzzy"]);
        let guess = app.current_guess.as_ref().unwrap();
        assert_eq!(guess.word.text(), "slate");
        assert_eq!(guess.rank, Some(1));
        assert_eq!(app.candidates_count(), 3);
    }

    #[test]
    fn feedback_narrows_and_records_history() {
        let mut app = app(&["irate", "crate", "grate", "slate"]);
        app.current_guess = Some(GuessInfo {
            word: Word::new("crate").unwrap(),
            score: None,
            rank: None,
            manual: true,
        });
        type_str(&mut app, "-gggg");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].candidates_before, 4);
        assert_eq!(app.history[0].candidates_after, 2);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Feedback);
    }

    #[test]
    fn win_enters_celebration_and_counts_game() {
        let mut app = app(&["crane", "slate"]);
        type_str(&mut app, "ggggg");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert!(app.history.is_empty());
        assert_eq!(app.candidates_count(), 2);
    }

    #[test]
    fn emoji_feedback_is_accepted() {
        let mut app = app(&["crane", "slate"]);
        app.handle_feedback("🟩🟩🟩🟩🟩");
        assert!(app.session.is_solved());
    }

    #[test]
    fn bad_feedback_leaves_state_alone() {
        let mut app = app(&["crane", "slate"]);
        type_str(&mut app, "gg");
        press(&mut app, KeyCode::Enter);
        assert!(app.history.is_empty());
        assert_eq!(app.input_buffer, "gg");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn undo_restores_previous_round() {
        let mut app = app(&["crane", "slate", "fuzzy"]);
        type_str(&mut app, "-----");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history.len(), 1);

        press(&mut app, KeyCode::Char('u'));
        assert!(app.history.is_empty());
        assert_eq!(app.candidates_count(), 3);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.messages.last().unwrap().text, "Nothing to undo!");
    }

    #[test]
    fn undoing_a_win_removes_it_from_stats() {
        let mut app = app(&["crane", "slate"]);
        app.handle_feedback("ggggg");
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.stats.total_games, 0);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.input_mode, InputMode::Feedback);
    }

    #[test]
    fn manual_word_replaces_suggestion() {
        let mut app = app(&["crane", "slate", "fuzzy"]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::ManualWord);
        type_str(&mut app, "Fuzzy1");
        assert_eq!(app.manual_word, "fuzzy");
        press(&mut app, KeyCode::Enter);

        let guess = app.current_guess.as_ref().unwrap();
        assert_eq!(guess.word.text(), "fuzzy");
        assert!(guess.manual);
        assert_eq!(guess.rank, Some(3));
        assert_eq!(app.input_mode, InputMode::Feedback);
    }

    #[test]
    fn short_manual_word_is_refused() {
        let mut app = app(&["crane", "slate"]);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::ManualWord);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert!(app.manual_word.is_empty());
    }

    #[test]
    fn running_out_of_rounds_ends_the_game() {
        let session = Session::new(
            words_from_slice(&["crane", "slate", "fuzzy"]),
            CandidateRanker::default(),
            Strategy::All,
        )
        .with_max_rounds(1);
        let mut app = App::new(session, FeedbackSymbols::default());
        app.handle_feedback("g----");
        assert_eq!(app.input_mode, InputMode::OutOfGuesses);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn q_quits_unless_it_is_a_feedback_symbol() {
        let session = Session::new(
            words_from_slice(&["crane", "slate"]),
            CandidateRanker::default(),
            Strategy::All,
        );
        let symbols = FeedbackSymbols::new('q', 'y', '-').unwrap();
        let mut custom = App::new(session, symbols);
        press(&mut custom, KeyCode::Char('q'));
        assert!(!custom.should_quit);
        assert_eq!(custom.input_buffer, "q");

        let mut default = app(&["crane"]);
        press(&mut default, KeyCode::Char('q'));
        assert!(default.should_quit);
    }
}
