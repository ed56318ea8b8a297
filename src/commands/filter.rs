//! Filter the dictionary with known results
//!
//! Applies `guess:grade` pairs typed by the user, as when playing a real game
//! and asking which words are still possible.

use crate::core::{CandidateSet, GuessResult, LetterPossibility};
use crate::dictionary::Dictionary;
use crate::error::WordleError;

/// What is left after applying every result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub candidates: CandidateSet,
    /// Letters the results prove absent, alphabetically
    pub ruled_out: Vec<char>,
}

/// Parse `guess:grade` arguments such as `lares:01110`
///
/// # Errors
/// `WordleError::InvalidGrade` or `WordleError::InvalidLength` for malformed
/// arguments.
pub fn parse_results<S: AsRef<str>>(args: &[S]) -> Result<Vec<GuessResult>, WordleError> {
    args.iter().map(|arg| arg.as_ref().parse()).collect()
}

/// Reduce the dictionary with every result in turn
///
/// # Errors
/// - `WordleError::InvalidLength` if a guess is not a dictionary-length word
/// - `WordleError::EmptyCandidateSet` if the results rule out every word
pub fn filter_dictionary(
    dictionary: &Dictionary,
    results: &[GuessResult],
) -> Result<FilterOutcome, WordleError> {
    let mut candidates = CandidateSet::new(dictionary.words().to_vec());
    let mut letters = LetterPossibility::new();

    for result in results {
        if result.guess().len() != dictionary.word_length() {
            return Err(WordleError::InvalidLength {
                expected: dictionary.word_length(),
                found: result.guess().len(),
            });
        }
        candidates.apply(result)?;
        letters.update(result);
    }

    Ok(FilterOutcome {
        candidates,
        ruled_out: letters.ruled_out(),
    })
}
