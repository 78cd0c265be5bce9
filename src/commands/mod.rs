//! Command implementations
//!
//! Each command validates its text inputs, runs one core operation and returns
//! a result struct for the output layer.

pub mod analyze;
pub mod filter;
pub mod score;
pub mod select;

pub use analyze::{AnalysisResult, analyze_guess};
pub use filter::{FilterResult, filter_pool};
pub use score::{ScoreResult, score_words};
pub use select::{SelectResult, select_from};

use crate::core::{Word, words_from_strs};

/// Parse a pool given on the command line
fn parse_pool<S: AsRef<str>>(words: &[S]) -> Result<Vec<Word>, String> {
    words_from_strs(words).map_err(|(text, e)| format!("Invalid word '{text}': {e}"))
}
