//! Command implementations

pub mod benchmark;
pub mod rank;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_words};
pub use rank::{RankError, parse_hint, rank_with_hints};
pub use simple::{run_simple, run_simple_with};
pub use solve::{
    GuessStep, SimulationError, SolveConfig, SolveError, SolveResult, simulate, solve_word,
};
pub use test_all::{TestAllStatistics, run_test_all};
