//! Candidate filtering
//!
//! Narrows a candidate pool to the words consistent with observed feedback.

use crate::core::{Feedback, Word};
use log::trace;

/// Keep the pool words that would give `feedback` for `guess`
///
/// A word survives only if both bulls and cows match exactly. Order is
/// preserved. An empty result is not an error: it means no secret in the
/// pool is consistent with the feedback.
///
/// # Examples
/// ```
/// use bulls_cows::core::{Feedback, Word, words_from_strs};
/// use bulls_cows::solver::filter_candidates;
///
/// let pool = words_from_strs(&["word", "ward", "wore", "lord"]).unwrap();
/// let guess = Word::new("word").unwrap();
///
/// let remaining = filter_candidates(&pool, &guess, Feedback::WIN);
/// assert_eq!(remaining, words_from_strs(&["word"]).unwrap());
/// ```
#[must_use]
pub fn filter_candidates(pool: &[Word], guess: &Word, feedback: Feedback) -> Vec<Word> {
    let remaining: Vec<Word> = pool
        .iter()
        .filter(|&secret| Feedback::score(guess, secret) == feedback)
        .cloned()
        .collect();

    trace!(
        "{guess} with {feedback}: {} of {} candidates remain",
        remaining.len(),
        pool.len()
    );
    remaining
}

/// Keep the pool words consistent with every (guess, feedback) pair observed so far
///
/// Equivalent to applying [`filter_candidates`] once per history entry.
#[must_use]
pub fn filter_by_history(pool: &[Word], history: &[(Word, Feedback)]) -> Vec<Word> {
    pool.iter()
        .filter(|&secret| is_consistent(secret, history))
        .cloned()
        .collect()
}

/// Count how many pool words are consistent with the history
#[must_use]
pub fn count_consistent(pool: &[Word], history: &[(Word, Feedback)]) -> usize {
    pool.iter()
        .filter(|&secret| is_consistent(secret, history))
        .count()
}

fn is_consistent(secret: &Word, history: &[(Word, Feedback)]) -> bool {
    history
        .iter()
        .all(|(guess, observed)| Feedback::score(guess, secret) == *observed)
}
