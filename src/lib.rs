//! Bulls and Cows Solver
//!
//! Decision core for a Bulls and Cows word game over 4-letter words: feedback
//! scoring, candidate filtering and bounded minimax guess selection.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Feedback, Word, words_from_strs};
//! use bulls_cows::solver::{filter_candidates, select_guess};
//!
//! let pool = words_from_strs(&["that", "than", "chat", "flat", "slat"]).unwrap();
//! let secret = Word::new("slat").unwrap();
//!
//! // Pick a guess, score it, narrow the pool
//! let guess = select_guess(&pool).unwrap();
//! let feedback = Feedback::score(guess, &secret);
//! let remaining = filter_candidates(&pool, guess, feedback);
//!
//! assert!(remaining.contains(&secret));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
