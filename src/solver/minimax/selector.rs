//! Minimax-based guess selection strategy
//!
//! Selects the sampled guess that minimizes the worst-case remaining pool,
//! with fast paths for very small and very large pools.

use super::calculator::worst_case;
use crate::core::Word;
use crate::solver::config::MinimaxConfig;
use log::{debug, trace};
use rayon::prelude::*;
use std::fmt;

/// Error type for guess selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    EmptyPool,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "Cannot select a guess from an empty candidate pool"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Worst-case bucket size of every sampled guess, in sample order
///
/// The sample is the first `min(pool.len(), sample_size)` words. Each one is
/// scored against the full pool. Fast-path thresholds are not applied here.
///
/// # Examples
/// ```
/// use bulls_cows::core::words_from_strs;
/// use bulls_cows::solver::MinimaxConfig;
/// use bulls_cows::solver::minimax::evaluate_sample;
///
/// let pool = words_from_strs(&["aaaa", "bbbb", "cccc"]).unwrap();
/// let scores = evaluate_sample(&pool, &MinimaxConfig::default());
///
/// let worst: Vec<usize> = scores.iter().map(|&(_, worst)| worst).collect();
/// assert_eq!(worst, [2, 2, 2]);
/// ```
#[must_use]
pub fn evaluate_sample<'a>(pool: &'a [Word], config: &MinimaxConfig) -> Vec<(&'a Word, usize)> {
    pool[..config.sample_len(pool.len())]
        .par_iter()
        .map(|guess| (guess, worst_case(guess, pool)))
        .collect()
}

/// Select the next guess using the default thresholds
///
/// # Errors
/// Returns `SelectError::EmptyPool` if the pool is empty.
///
/// # Examples
/// ```
/// use bulls_cows::core::words_from_strs;
/// use bulls_cows::solver::select_guess;
///
/// let pool = words_from_strs(&["word", "ward"]).unwrap();
/// assert_eq!(select_guess(&pool).unwrap().text(), "word");
///
/// let pool = words_from_strs(&["that", "than", "chat", "flat", "slat"]).unwrap();
/// assert_eq!(select_guess(&pool).unwrap().text(), "flat");
/// ```
pub fn select_guess(pool: &[Word]) -> Result<&Word, SelectError> {
    select_guess_with(pool, &MinimaxConfig::default())
}

/// Select the next guess by minimizing the worst-case remaining pool
///
/// Returns `pool[0]` when the pool size falls on a fast path. Otherwise the
/// sampled guess with the strictly smallest worst case wins; ties keep the
/// earliest guess.
///
/// # Errors
/// Returns `SelectError::EmptyPool` if the pool is empty.
pub fn select_guess_with<'a>(
    pool: &'a [Word],
    config: &MinimaxConfig,
) -> Result<&'a Word, SelectError> {
    let first = pool.first().ok_or(SelectError::EmptyPool)?;

    if config.skips_search(pool.len()) {
        debug!(
            "pool of {} skips minimax search, guessing {first}",
            pool.len()
        );
        return Ok(first);
    }

    let mut best = first;
    let mut best_worst = usize::MAX;

    for (guess, worst) in evaluate_sample(pool, config) {
        trace!("{guess}: worst case {worst}");
        if worst < best_worst {
            best = guess;
            best_worst = worst;
        }
    }

    debug!(
        "selected {best} with worst case {best_worst} of {} candidates",
        pool.len()
    );
    Ok(best)
}

/// Minimax guess selector with fixed thresholds
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxSelector {
    config: MinimaxConfig,
}

impl MinimaxSelector {
    #[must_use]
    pub const fn new(config: MinimaxConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Select the next guess from the pool
    ///
    /// # Errors
    /// Returns `SelectError::EmptyPool` if the pool is empty.
    pub fn select<'a>(&self, pool: &'a [Word]) -> Result<&'a Word, SelectError> {
        select_guess_with(pool, &self.config)
    }
}
