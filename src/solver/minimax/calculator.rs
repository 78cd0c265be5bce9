//! Minimax worst-case calculation for Bulls and Cows feedback
//!
//! Given a guess and a candidate pool, partitions the pool by the feedback each
//! candidate would produce and reports the size of the largest partition.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Calculate the worst-case remaining pool size for a guess
///
/// For each possible feedback this guess could receive, count the candidates
/// that would produce it, and return the largest count.
///
/// # Examples
/// ```
/// use bulls_cows::core::words_from_strs;
/// use bulls_cows::solver::minimax::worst_case;
///
/// let pool = words_from_strs(&["that", "than", "chat", "flat", "slat"]).unwrap();
///
/// assert!(worst_case(&pool[0], &pool) <= pool.len());
/// assert_eq!(worst_case(&pool[0], &[]), 0);
/// ```
#[must_use]
pub fn worst_case(guess: &Word, pool: &[Word]) -> usize {
    bucket_sizes(guess, pool)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group the pool by the feedback each word produces against the guess
///
/// Returns the number of pool words per feedback; the counts sum to `pool.len()`.
#[must_use]
pub fn bucket_sizes(guess: &Word, pool: &[Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for secret in pool {
        let feedback = Feedback::score(guess, secret);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Expected pool size after guessing, assuming every pool word is equally likely
///
/// A bucket of size `n` is reached with probability `n / N` and leaves `n`
/// words, so the expectation is `sum(n^2) / N`. Returns 0.0 for an empty pool.
#[must_use]
pub fn expected_remaining(guess: &Word, pool: &[Word]) -> f64 {
    if pool.is_empty() {
        return 0.0;
    }

    let sum_of_squares: usize = bucket_sizes(guess, pool).values().map(|&n| n * n).sum();
    sum_of_squares as f64 / pool.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::words_from_strs;

    fn pool(texts: &[&str]) -> Vec<Word> {
        words_from_strs(texts).unwrap()
    }

    #[test]
    fn worst_case_perfect_split() {
        // Each word lands in its own bucket
        let candidates = pool(&["word", "film"]);
        assert_eq!(worst_case(&candidates[0], &candidates), 1);
    }

    #[test]
    fn worst_case_all_same_feedback() {
        let candidates = pool(&["aaaa", "bbbb", "cccc"]);
        let guess = Word::new("zzzz").unwrap();
        assert_eq!(worst_case(&guess, &candidates), 3);
    }

    #[test]
    fn worst_case_empty_pool() {
        let guess = Word::new("word").unwrap();
        assert_eq!(worst_case(&guess, &[]), 0);
    }

    #[test]
    fn worst_case_single_candidate() {
        let guess = Word::new("word").unwrap();
        assert_eq!(worst_case(&guess, &pool(&["film"])), 1);
    }

    #[test]
    fn buckets_partition_the_pool() {
        let candidates = pool(&["that", "than", "chat", "flat", "slat"]);
        let guess = Word::new("that").unwrap();
        let buckets = bucket_sizes(&guess, &candidates);

        assert_eq!(buckets.values().sum::<usize>(), candidates.len());
        assert_eq!(buckets.get(&Feedback::WIN), Some(&1));
        // flat and slat both share "at" in place with "that"
        assert_eq!(buckets.get(&Feedback::new(2, 0)), Some(&2));
    }

    #[test]
    fn expected_remaining_bounds() {
        let candidates = pool(&["that", "than", "chat", "flat", "slat"]);
        for guess in &candidates {
            let expected = expected_remaining(guess, &candidates);
            assert!(expected >= 1.0);
            assert!(expected <= worst_case(guess, &candidates) as f64);
        }
    }

    #[test]
    fn expected_remaining_empty_pool() {
        let guess = Word::new("word").unwrap();
        assert!(expected_remaining(&guess, &[]).abs() < f64::EPSILON);
    }
}
