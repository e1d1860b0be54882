//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_constraints, print_ranking, print_solve_result,
    print_test_all_statistics,
};
