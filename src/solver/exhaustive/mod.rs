//! Exhaustive search strategy
//!
//! Scores every dictionary word by the candidates it would leave behind,
//! summed over every candidate as the answer, and guesses the minimum.

mod calculator;
mod selector;

pub use calculator::{expected_remaining, group_by_grade, total_remaining};
pub use selector::select_best_guess;

use super::strategy::{Strategy, TurnContext};
use crate::core::Word;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveStrategy;

impl Strategy for ExhaustiveStrategy {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn next_guess(
        &self,
        all_words: &[Word],
        candidates: &[Word],
        _ctx: &mut TurnContext<'_>,
    ) -> Option<Word> {
        if candidates.len() <= 1 {
            return candidates.first().cloned();
        }

        select_best_guess(all_words, candidates)
            .map(|(best, _)| best)
            .or_else(|| candidates.first())
            .cloned()
    }
}
