//! Filter command
//!
//! Narrows a pool given on the command line with one observed feedback.

use super::parse_pool;
use crate::core::{Feedback, Word};
use crate::solver::filter_candidates;

/// Result of filtering a pool
pub struct FilterResult {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub remaining: Vec<Word>,
}

/// Filter `words` to those consistent with `guess` scoring `feedback`
///
/// # Errors
///
/// Returns an error if:
/// - The guess or any pool word is not 4 ASCII letters
/// - The feedback text cannot be parsed
pub fn filter_pool<S: AsRef<str>>(
    guess: &str,
    feedback: &str,
    words: &[S],
) -> Result<FilterResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let feedback: Feedback = feedback.parse()?;
    let pool = parse_pool(words)?;

    let remaining = filter_candidates(&pool, &guess, feedback);

    Ok(FilterResult {
        guess,
        feedback,
        candidates_before: pool.len(),
        remaining,
    })
}
