//! Guess analysis command
//!
//! Shows how a guess would partition a pool by feedback.

use super::parse_pool;
use crate::core::{Feedback, Word};
use crate::solver::minimax::{bucket_sizes, expected_remaining};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Word,
    /// Feedback buckets, most bulls first
    pub buckets: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    /// Whether the guess itself could be the secret
    pub in_pool: bool,
}

/// Analyze how `guess` splits the pool `words`
///
/// The guess does not have to be a member of the pool.
///
/// # Errors
///
/// Returns an error if the guess or any pool word is invalid, or the pool is empty.
pub fn analyze_guess<S: AsRef<str>>(guess: &str, words: &[S]) -> Result<AnalysisResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let pool = parse_pool(words)?;

    if pool.is_empty() {
        return Err("Cannot analyze against an empty pool".to_string());
    }

    let mut buckets: Vec<(Feedback, usize)> = bucket_sizes(&guess, &pool).into_iter().collect();
    buckets.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    let worst_case = buckets.iter().map(|&(_, n)| n).max().unwrap_or(0);

    Ok(AnalysisResult {
        expected_remaining: expected_remaining(&guess, &pool),
        in_pool: pool.contains(&guess),
        total_candidates: pool.len(),
        guess,
        buckets,
        worst_case,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: [&str; 5] = ["that", "than", "chat", "flat", "slat"];

    #[test]
    fn analyze_member_guess() {
        let result = analyze_guess("flat", &POOL).unwrap();

        assert!(result.in_pool);
        assert_eq!(result.total_candidates, 5);
        assert_eq!(result.worst_case, 1);
        assert_eq!(result.buckets.len(), 5);
        assert_eq!(result.buckets[0], (Feedback::WIN, 1));
        assert!((result.expected_remaining - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn analyze_outside_guess() {
        let result = analyze_guess("zzzz", &POOL).unwrap();

        assert!(!result.in_pool);
        assert_eq!(result.buckets, [(Feedback::new(0, 0), 5)]);
        assert_eq!(result.worst_case, 5);
    }

    #[test]
    fn buckets_sum_to_pool() {
        let result = analyze_guess("that", &POOL).unwrap();
        let total: usize = result.buckets.iter().map(|&(_, n)| n).sum();
        assert_eq!(total, POOL.len());
    }

    #[test]
    fn empty_pool_is_an_error() {
        let words: [&str; 0] = [];
        assert!(analyze_guess("that", &words).is_err());
    }
}
