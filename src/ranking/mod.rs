//! Letter-frequency ranking of candidate words

mod ranker;
mod weights;

pub use ranker::{CandidateRanker, Ranking};
pub use weights::{LetterWeights, Table, WeightError};
