//! Core domain types and the candidate consistency engine
//!
//! Everything here is pure: words, grades, the grader, the consistency check
//! and the reducer built on it. Nothing in this module touches the terminal.

mod candidates;
mod consistency;
mod grade;
mod letters;
mod word;

pub use candidates::{CandidateSet, reduce};
pub use consistency::is_consistent;
pub use grade::{Grade, GuessResult, Mark, grade};
pub use letters::LetterPossibility;
pub use word::{MAX_WORD_LENGTH, Word, WordError};
