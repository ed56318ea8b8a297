//! Grade a single guess

use crate::core::{GuessResult, Word};
use crate::error::WordleError;

/// Grade `guess` against `answer`
///
/// Neither word has to be in the dictionary.
///
/// # Errors
/// - `WordleError::InvalidWord` if either text is not a word
/// - `WordleError::InvalidLength` if the lengths differ
pub fn grade_guess(answer: &str, guess: &str) -> Result<GuessResult, WordleError> {
    let parse = |text: &str| {
        Word::new(text.trim()).map_err(|source| WordleError::InvalidWord {
            text: text.to_string(),
            source,
        })
    };
    GuessResult::score(&parse(answer)?, &parse(guess)?)
}
