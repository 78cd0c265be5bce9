//! Core domain types for Bulls and Cows
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, score};
pub use word::{WORD_LEN, Word, WordError, words_from_strs};
