//! Interactive TUI interface
//!
//! Full-screen hint session built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{
    App, GuessInfo, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui,
};
