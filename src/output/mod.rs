//! Terminal output formatting
//!
//! Display utilities for turns, game results and command reports.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_outcome, print_solve_result, print_turn};
