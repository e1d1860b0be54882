//! Core hint-tracking types
//!
//! Pure, synchronous domain types: validated words, feedback classification,
//! per-position letter facts and whole-word constraints.

mod constraints;
mod error;
mod feedback;
mod letter;
mod word;

pub use constraints::WordConstraints;
pub use error::HintError;
pub use feedback::{Feedback, FeedbackSymbols, Verdict, classify, classify_bytes};
pub use letter::{LetterConstraint, LetterSet};
pub use word::{WORD_LEN, Word};
