//! Bulls and Cows solving algorithms
//!
//! Candidate filtering and bounded minimax guess selection.

pub mod config;
mod filter;
pub mod minimax;

pub use config::MinimaxConfig;
pub use filter::{count_consistent, filter_by_history, filter_candidates};
pub use minimax::{MinimaxSelector, SelectError, select_guess, select_guess_with};
