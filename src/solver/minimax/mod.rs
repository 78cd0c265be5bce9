//! Minimax-based Bulls and Cows guess selection
//!
//! Implements bounded worst-case minimization over a sample of the pool.

mod calculator;
mod selector;

pub use calculator::{bucket_sizes, expected_remaining, worst_case};
pub use selector::{
    MinimaxSelector, SelectError, evaluate_sample, select_guess, select_guess_with,
};
