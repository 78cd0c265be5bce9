//! Tuning thresholds for minimax guess selection

/// Pools at or below this size return their first word without searching
pub const SMALL_POOL_LIMIT: usize = 2;

/// Pools above this size return their first word without searching
pub const LARGE_POOL_LIMIT: usize = 200;

/// Number of leading pool words evaluated as candidate guesses
pub const SAMPLE_SIZE: usize = 60;

/// Thresholds bounding the cost of minimax selection
///
/// The search scores at most `sample_size × pool.len()` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxConfig {
    /// `pool.len() <= small_pool_limit` skips the search
    pub small_pool_limit: usize,
    /// `pool.len() > large_pool_limit` skips the search
    pub large_pool_limit: usize,
    /// How many leading pool words are tried as guesses
    pub sample_size: usize,
}

impl MinimaxConfig {
    #[must_use]
    pub const fn new(small_pool_limit: usize, large_pool_limit: usize, sample_size: usize) -> Self {
        Self {
            small_pool_limit,
            large_pool_limit,
            sample_size,
        }
    }

    /// Whether a pool of this size is answered by its first word
    #[inline]
    #[must_use]
    pub const fn skips_search(&self, pool_len: usize) -> bool {
        pool_len <= self.small_pool_limit || pool_len > self.large_pool_limit
    }

    /// Number of leading pool words evaluated for a pool of this size
    #[inline]
    #[must_use]
    pub fn sample_len(&self, pool_len: usize) -> usize {
        pool_len.min(self.sample_size)
    }
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self::new(SMALL_POOL_LIMIT, LARGE_POOL_LIMIT, SAMPLE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let config = MinimaxConfig::default();
        assert_eq!(config.small_pool_limit, 2);
        assert_eq!(config.large_pool_limit, 200);
        assert_eq!(config.sample_size, 60);
    }

    #[test]
    fn fast_path_boundaries() {
        let config = MinimaxConfig::default();
        assert!(config.skips_search(1));
        assert!(config.skips_search(2));
        assert!(!config.skips_search(3));
        assert!(!config.skips_search(200));
        assert!(config.skips_search(201));
    }

    #[test]
    fn sample_len_is_capped() {
        let config = MinimaxConfig::default();
        assert_eq!(config.sample_len(10), 10);
        assert_eq!(config.sample_len(60), 60);
        assert_eq!(config.sample_len(150), 60);
    }
}
