//! Select command
//!
//! Suggests the next guess for a pool given on the command line.

use super::parse_pool;
use crate::core::Word;
use crate::solver::minimax::worst_case;
use crate::solver::{MinimaxConfig, MinimaxSelector};

/// Result of selecting a guess
pub struct SelectResult {
    pub guess: Word,
    pub total_candidates: usize,
    /// Worst-case remaining candidates, `None` when a fast path skipped the search
    pub worst_case: Option<usize>,
    pub sampled: usize,
}

/// Select the next guess from `words`
///
/// # Errors
///
/// Returns an error if any pool word is invalid or the pool is empty.
pub fn select_from<S: AsRef<str>>(
    words: &[S],
    config: MinimaxConfig,
) -> Result<SelectResult, String> {
    let pool = parse_pool(words)?;
    let selector = MinimaxSelector::new(config);
    let guess = selector.select(&pool).map_err(|e| e.to_string())?;

    let searched = !config.skips_search(pool.len());
    let worst = searched.then(|| worst_case(guess, &pool));
    let sampled = if searched {
        config.sample_len(pool.len())
    } else {
        0
    };

    Ok(SelectResult {
        guess: guess.clone(),
        total_candidates: pool.len(),
        worst_case: worst,
        sampled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_reports_no_worst_case() {
        let result = select_from(&["word", "ward"], MinimaxConfig::default()).unwrap();
        assert_eq!(result.guess.text(), "word");
        assert_eq!(result.worst_case, None);
        assert_eq!(result.sampled, 0);
    }

    #[test]
    fn searched_pool_reports_worst_case() {
        let words = ["that", "than", "chat", "flat", "slat"];
        let result = select_from(&words, MinimaxConfig::default()).unwrap();

        assert_eq!(result.guess.text(), "flat");
        assert_eq!(result.worst_case, Some(1));
        assert_eq!(result.sampled, 5);
        assert_eq!(result.total_candidates, 5);
    }

    #[test]
    fn empty_pool_is_an_error() {
        let words: [&str; 0] = [];
        assert!(select_from(&words, MinimaxConfig::default()).is_err());
    }
}
