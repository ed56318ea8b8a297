//! Candidate set reduction

use super::{GuessResult, Word, is_consistent};
use crate::error::WordleError;
use log::debug;

/// Keep the candidates consistent with `result`, preserving order
#[must_use]
pub fn reduce(candidates: &[Word], result: &GuessResult) -> Vec<Word> {
    let survivors: Vec<Word> = candidates
        .iter()
        .filter(|candidate| is_consistent(candidate, result))
        .cloned()
        .collect();

    debug!(
        "{result} reduced the options from {} to {} words",
        candidates.len(),
        survivors.len()
    );

    survivors
}

/// The words still possible in the current game
///
/// Only ever shrinks. Reductions that would leave it empty are reported as
/// errors and leave the set untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Narrow the set with one more observed result
    ///
    /// Returns the number of surviving words.
    ///
    /// # Errors
    /// Returns `WordleError::EmptyCandidateSet` if no word survives, which
    /// means the answer was not among the candidates or the grade is wrong.
    pub fn apply(&mut self, result: &GuessResult) -> Result<usize, WordleError> {
        let survivors = reduce(&self.words, result);
        if survivors.is_empty() {
            return Err(WordleError::EmptyCandidateSet {
                guess: result.guess().to_string(),
                grade: result.grade().clone(),
            });
        }
        self.words = survivors;
        Ok(self.words.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn fixture_lares_against_crane() {
        let dictionary = words(&["lares", "crane", "trace", "crone"]);
        let answer = Word::new("crane").unwrap();
        let result = GuessResult::score(&answer, &Word::new("lares").unwrap()).unwrap();

        assert_eq!(result.grade().to_string(), "01110");
        assert_eq!(reduce(&dictionary, &result), words(&["crane", "trace"]));
    }

    #[test]
    fn reduce_preserves_order() {
        let pool = words(&["trace", "lares", "crane", "crone", "grace"]);
        let result: GuessResult = "lares:01110".parse().unwrap();
        assert_eq!(reduce(&pool, &result), words(&["trace", "crane", "grace"]));
    }

    #[test]
    fn apply_shrinks_and_keeps_answer() {
        let mut set = CandidateSet::new(words(&["lares", "crane", "trace", "crone"]));
        let answer = Word::new("crane").unwrap();

        let first = GuessResult::score(&answer, &Word::new("lares").unwrap()).unwrap();
        assert_eq!(set.apply(&first).unwrap(), 2);

        let second = GuessResult::score(&answer, &Word::new("trace").unwrap()).unwrap();
        assert_eq!(set.apply(&second).unwrap(), 1);
        assert!(set.contains(&answer));
    }

    #[test]
    fn apply_reports_empty_set() {
        let mut set = CandidateSet::new(words(&["crane", "trace"]));
        let result: GuessResult = "zzzzz:22222".parse().unwrap();

        let err = set.apply(&result).unwrap_err();
        assert!(matches!(err, WordleError::EmptyCandidateSet { ref guess, .. } if guess == "zzzzz"));
        // untouched on failure
        assert_eq!(set.len(), 2);
    }

    proptest! {
        #[test]
        fn reduce_never_grows(
            pool in prop::collection::vec("[a-e]{4}", 0..40),
            answer in "[a-e]{4}",
            guess in "[a-e]{4}",
        ) {
            let pool: Vec<Word> = pool.iter().map(|w| Word::new(w.as_str()).unwrap()).collect();
            let answer = Word::new(answer).unwrap();
            let result = GuessResult::score(&answer, &Word::new(guess).unwrap()).unwrap();

            let reduced = reduce(&pool, &result);
            prop_assert!(reduced.len() <= pool.len());

            // survivors are a subsequence of the input
            let mut rest = pool.iter();
            for word in &reduced {
                prop_assert!(rest.any(|w| w == word));
            }

            // a second pass with the same result removes nothing more
            prop_assert_eq!(reduce(&reduced, &result), reduced.clone());

            if pool.contains(&answer) {
                prop_assert!(reduced.contains(&answer));
            }
        }
    }
}
