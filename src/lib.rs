//! Wordle Autoplay
//!
//! Plays Wordle against itself: grades guesses with duplicate-letter
//! accounting, narrows the candidate words after every grade, and picks the
//! next guess with one of several strategies.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_autoplay::core::{GuessResult, Word, reduce};
//!
//! let candidates: Vec<Word> = ["lares", "crane", "trace", "crone"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let answer = Word::new("crane").unwrap();
//! let guess = Word::new("lares").unwrap();
//! let result = GuessResult::score(&answer, &guess).unwrap();
//! assert_eq!(result.grade().to_string(), "01110");
//!
//! let left = reduce(&candidates, &result);
//! assert_eq!(left.len(), 2);
//! ```

// Core domain types: words, grades, consistency, reduction
pub mod core;

// Word lists
pub mod dictionary;

pub mod error;

// Guess selection strategies
pub mod solver;

// Game loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::WordleError;
