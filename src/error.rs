//! Error types shared across the crate

use crate::core::{Grade, WordError};
use thiserror::Error;

/// The errors that `wordle_autoplay` can produce.
#[derive(Debug, Error)]
pub enum WordleError {
    /// Text that could not be turned into a [`Word`](crate::core::Word).
    #[error("invalid word \"{text}\": {source}")]
    InvalidWord {
        text: String,
        #[source]
        source: WordError,
    },

    /// Two words (or a word and a grade) that must share a length do not.
    #[error("length mismatch: expected {expected} letters, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// A guess that is not in the dictionary.
    #[error("the word \"{0}\" is not in the dictionary")]
    UnknownWord(String),

    /// Reducing the candidate set left nothing.
    ///
    /// Either the answer was never in the dictionary or a grade was wrong.
    #[error("no candidates remain after {guess} graded {grade}")]
    EmptyCandidateSet { guess: String, grade: Grade },

    #[error("the dictionary contains no usable words")]
    EmptyDictionary,

    #[error("unknown strategy \"{0}\" (expected random, frequency, exhaustive, staged or opening)")]
    UnknownStrategy(String),

    #[error("invalid grade \"{0}\"")]
    InvalidGrade(String),

    /// The strategy had nothing to offer.
    #[error("strategy {0} produced no guess")]
    NoGuess(&'static str),

    #[error("general IO error")]
    Io(#[from] std::io::Error),
}
