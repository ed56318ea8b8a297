//! Exhaustive guess selection
//!
//! Tries every word of the guess pool and keeps the one leaving the fewest
//! candidates in total.

use super::calculator::total_remaining;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Select best guess by minimising total remaining candidates
///
/// Ties go to words that are themselves candidates (they might win outright),
/// then to the earliest word in the pool. Returns the word and its total, or
/// `None` if the guess pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[Word],
) -> Option<(&'a Word, usize)> {
    let candidate_set: FxHashSet<&Word> = candidates.iter().collect();

    guess_pool
        .par_iter()
        .map(|guess| (guess, total_remaining(guess, candidates)))
        .min_by_key(|(guess, total)| (*total, !candidate_set.contains(guess)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn selects_lowest_total() {
        let guesses = words(&["zzzzz", "crane"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let (best, total) = select_best_guess(&guesses, &candidates).unwrap();
        assert_eq!(best.text(), "crane");
        assert!(total < 16);
    }

    #[test]
    fn ties_prefer_candidates() {
        // both split the pair perfectly; only one can win on the spot
        let guesses = words(&["zzzzz", "aaaaa", "bbbbb"]);
        let candidates = words(&["aaaaa", "bbbbb"]);

        let (best, total) = select_best_guess(&guesses, &candidates).unwrap();
        assert_eq!(best.text(), "aaaaa");
        assert_eq!(total, 2);
    }

    #[test]
    fn ties_then_prefer_pool_order() {
        let guesses = words(&["ddddd", "eeeee"]);
        let candidates = words(&["aaaaa", "bbbbb"]);

        for _ in 0..5 {
            let (best, total) = select_best_guess(&guesses, &candidates).unwrap();
            assert_eq!(best.text(), "ddddd");
            assert_eq!(total, 4);
        }
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["slate"]);
        assert!(select_best_guess(&[], &candidates).is_none());
    }
}
