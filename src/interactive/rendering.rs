//! TUI rendering with ratatui
//!
//! Board, ranking and constraint panels for the hint session.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, Verdict, Word};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Words listed in the ranking panel
const RANKING_ROWS: usize = 10;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE HINTS - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Current guess
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Ranking
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_ranking(f, app, chunks[2]);
}

fn tile_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Exact => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tiles(word: &Word, feedback: &Feedback) -> Vec<Span<'static>> {
    word.letters()
        .zip(feedback.verdicts())
        .flat_map(|(letter, &verdict)| {
            [
                Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    tile_style(verdict),
                ),
                Span::raw(" "),
            ]
        })
        .collect()
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(guess) = &app.current_guess else {
        let text = match app.input_mode {
            InputMode::WinCelebration => "Solved!",
            InputMode::OutOfGuesses => "Out of guesses",
            _ => "No suggestion available - TAB to enter a word",
        };
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    };

    let best = app.ranking.get(0).map_or(0.0, |(_, s)| s);
    let label = if guess.manual { "Trying:    " } else { "Suggested: " };
    let mut content = vec![Line::from(vec![
        Span::raw(label),
        Span::styled(
            guess.word.text().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    match (guess.score, guess.rank) {
        (Some(score), Some(rank)) => {
            content.push(Line::from(format!(
                "Score:     [{}] {score:.2}",
                create_progress_bar(score, best, 18)
            )));
            content.push(Line::from(format!(
                "Rank:      {rank} of {}",
                app.ranking.len()
            )));
        }
        _ => content.push(Line::from("Not a remaining candidate")),
    }
    if app.session.strategy().unique_only(app.session.round()) {
        content.push(Line::from(Span::styled(
            "Distinct letters only this round",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{}. ", i + 1))];
            spans.extend(tiles(&entry.guess, &entry.feedback));
            spans.push(Span::styled(
                format!(
                    " {} → {}",
                    entry.candidates_before, entry.candidates_after
                ),
                Style::default().fg(Color::DarkGray),
            ));
            Line::from(spans)
        })
        .collect();

    for round in app.history.len()..app.session.max_rounds() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", round + 1, "___ ".repeat(5)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(
                " Board ({} of {} rounds) ",
                app.history.len(),
                app.session.max_rounds()
            ))
            .borders(Borders::ALL),
    );
    f.render_widget(board, area);
}

fn render_ranking(f: &mut Frame, app: &App, area: Rect) {
    let best = app.ranking.get(0).map_or(0.0, |(_, s)| s);
    let items: Vec<ListItem> = app
        .ranking
        .top(RANKING_ROWS)
        .iter()
        .enumerate()
        .map(|(i, (word, score))| {
            let chosen = app
                .current_guess
                .as_ref()
                .is_some_and(|g| g.word == *word);
            let style = if chosen {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. {:<5} ", i + 1, word.text().to_uppercase()), style),
                Span::styled(
                    create_progress_bar(*score, best, 12),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(format!(" {score:.1}"), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let title = if app.ranking.len() > RANKING_ROWS {
        format!(" Top {RANKING_ROWS} of {} ", app.ranking.len())
    } else {
        " Ranking ".to_string()
    };
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search space gauge
            Constraint::Length(5), // Constraints
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_constraints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.source().len();
    let remaining = app.candidates_count();
    let eliminated = total.saturating_sub(remaining);
    let progress_pct = if total == 0 {
        0
    } else {
        (eliminated * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{remaining} of {total} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = app.session.constraints();
    let known: Vec<Span> = constraints
        .positions()
        .iter()
        .flat_map(|p| {
            let (text, style) = match p.solution() {
                Some(c) => (
                    format!(" {} ", c.to_ascii_uppercase()),
                    tile_style(Verdict::Exact),
                ),
                None => (" _ ".to_string(), Style::default().fg(Color::DarkGray)),
            };
            [Span::styled(text, style), Span::raw(" ")]
        })
        .collect();

    let pending: String = constraints
        .pending()
        .iter()
        .map(char::to_ascii_uppercase)
        .collect();

    let content = vec![
        Line::from(known),
        Line::from(vec![
            Span::raw("Misplaced: "),
            Span::styled(
                if pending.is_empty() { "-".to_string() } else { pending },
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Known Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::OutOfGuesses => (
            " Out of guesses | 'u' to undo, 'n' for new game, 'q' to quit ".to_string(),
            "",
            Color::Red,
        ),
        InputMode::Feedback => (
            format!(
                " Enter Feedback ({}, or emojis) | TAB for manual word ",
                app.symbols.legend()
            ),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Enter Word to Try (5 letters) | ESC to cancel ".to_string(),
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let strategy = Paragraph::new(format!("Strategy: {}", app.session.strategy()))
        .alignment(Alignment::Center);
    f.render_widget(strategy, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let round_text = format!(
        "Round {} of {}",
        app.session.round().min(app.session.max_rounds()),
        app.session.max_rounds()
    );
    f.render_widget(
        Paragraph::new(round_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.session.is_over() {
        "q: Quit | n: New Game | u: Undo"
    } else {
        "q: Quit | u: Undo | Enter: Submit | TAB: Manual Word"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackSymbols;
    use crate::ranking::CandidateRanker;
    use crate::solver::{Session, Strategy};
    use crate::wordlists::words_from_slice;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_suggestion_and_ranking() {
        let session = Session::new(
            words_from_slice(&["crane", "slate", "fuzzy"]),
            CandidateRanker::default(),
            Strategy::All,
        );
        let app = App::new(session, FeedbackSymbols::default());
        let text = screen(&app);
        assert!(text.contains("SLATE"));
        assert!(text.contains("FUZZY"));
        assert!(text.contains("3 of 3 candidates remain"));
    }

    #[test]
    fn draws_board_after_feedback() {
        let session = Session::new(
            words_from_slice(&["crane", "slate", "fuzzy"]),
            CandidateRanker::default(),
            Strategy::All,
        );
        let mut app = App::new(session, FeedbackSymbols::default());
        app.handle_feedback("-----");
        let text = screen(&app);
        assert!(text.contains("Board (1 of 6 rounds)"));
        assert!(text.contains("1 of 3 candidates remain"));
    }
}
