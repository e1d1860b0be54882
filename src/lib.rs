//! Wordle Hints
//!
//! Tracks what a Wordle puzzle's feedback has revealed and ranks the words
//! that can still be the answer by letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::core::{FeedbackSymbols, Word, WordConstraints, classify};
//! use wordle_hints::ranking::CandidateRanker;
//!
//! // Score a guess against a known answer
//! let feedback = classify("crane", "slate").unwrap();
//! assert_eq!(feedback.to_string(), "--g-g");
//!
//! // Narrow a word list with typed feedback
//! let mut constraints = WordConstraints::new();
//! constraints
//!     .update_str("crane", "--g-g", &FeedbackSymbols::default())
//!     .unwrap();
//! assert!(constraints.check_str("slate").unwrap());
//! assert!(!constraints.check_str("crane").unwrap());
//!
//! // Rank what is left
//! let words: Vec<Word> = ["slate", "plate", "fuzzy"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let ranking = CandidateRanker::default().rank(&constraints.filter(&words), false);
//! assert_eq!(ranking.len(), 2);
//! ```

// Core domain types
pub mod core;

// Letter-frequency scoring
pub mod ranking;

// Game sessions and suggestion strategies
pub mod solver;

// Word lists
pub mod wordlists;

// Past-answer archive
pub mod archive;

// Optional TOML settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
