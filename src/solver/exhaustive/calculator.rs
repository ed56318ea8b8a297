//! Remaining-candidate totals for a guess
//!
//! Given a guess and the candidate set, computes how many candidates would be
//! left after guessing it, summed over every candidate taken as the answer.

use crate::core::{Grade, Word, grade};
use rustc_hash::FxHashMap;

/// Total remaining candidates for a guess
///
/// Equal to `Σ |reduce(candidates, grade(answer, guess))|` over every answer in
/// `candidates`. Candidates that share a grade survive each other's
/// reductions and nothing else, so each group of size k contributes k².
///
/// # Examples
/// ```
/// use wordle_autoplay::core::Word;
/// use wordle_autoplay::solver::exhaustive::total_remaining;
///
/// let guess = Word::new("lares").unwrap();
/// let candidates: Vec<Word> = ["crane", "trace", "crone"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// // crane and trace share a grade, crone stands alone: 2² + 1²
/// assert_eq!(total_remaining(&guess, &candidates), 5);
/// ```
#[must_use]
pub fn total_remaining(guess: &Word, candidates: &[Word]) -> usize {
    group_by_grade(guess, candidates)
        .values()
        .map(|&count| count * count)
        .sum()
}

/// Average remaining candidates for a guess, over every candidate as answer
#[must_use]
pub fn expected_remaining(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    total_remaining(guess, candidates) as f64 / candidates.len() as f64
}

/// Group candidates by the grade the guess would earn against them
///
/// Candidates of a different length than the guess are left out.
#[must_use]
pub fn group_by_grade(guess: &Word, candidates: &[Word]) -> FxHashMap<Grade, usize> {
    let mut counts = FxHashMap::default();

    for answer in candidates {
        if let Ok(grade) = grade(answer, guess) {
            *counts.entry(grade).or_insert(0) += 1;
        }
    }

    counts
}
