//! Staged strategy
//!
//! Switches tactics as the candidate set thins out.

use super::exhaustive::ExhaustiveStrategy;
use super::frequency::FrequencyStrategy;
use super::random::RandomStrategy;
use super::strategy::{Strategy, TurnContext};
use crate::core::Word;

/// Staged strategy with configurable thresholds
///
/// Thresholds use cascading `>` comparisons:
/// ```text
/// if candidates > frequency_threshold       → Frequency
/// else if candidates > exhaustive_threshold → Exhaustive
/// else                                      → Random
/// ```
///
/// The exhaustive search grows with the square of the candidate count, so it
/// only runs once the cheap frequency guesses have cut the set down.
#[derive(Debug, Clone)]
pub struct StagedStrategy {
    /// Candidates > this use letter frequency (default: 60)
    pub frequency_threshold: usize,

    /// Candidates > this use exhaustive search (default: 2)
    pub exhaustive_threshold: usize,
}

/// The stage picked for a candidate count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Frequency,
    Exhaustive,
    Random,
}

impl StagedStrategy {
    #[must_use]
    pub const fn new(frequency_threshold: usize, exhaustive_threshold: usize) -> Self {
        Self {
            frequency_threshold,
            exhaustive_threshold,
        }
    }

    #[must_use]
    pub const fn stage(&self, num_candidates: usize) -> Stage {
        if num_candidates > self.frequency_threshold {
            Stage::Frequency
        } else if num_candidates > self.exhaustive_threshold {
            Stage::Exhaustive
        } else {
            Stage::Random
        }
    }
}

impl Default for StagedStrategy {
    fn default() -> Self {
        Self::new(60, 2)
    }
}

impl Strategy for StagedStrategy {
    fn name(&self) -> &'static str {
        "staged"
    }

    fn next_guess(
        &self,
        all_words: &[Word],
        candidates: &[Word],
        ctx: &mut TurnContext<'_>,
    ) -> Option<Word> {
        match self.stage(candidates.len()) {
            Stage::Frequency => FrequencyStrategy.next_guess(all_words, candidates, ctx),
            Stage::Exhaustive => ExhaustiveStrategy.next_guess(all_words, candidates, ctx),
            Stage::Random => RandomStrategy.next_guess(all_words, candidates, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::test_support::{with_context, words};

    #[test]
    fn default_thresholds() {
        let strategy = StagedStrategy::default();
        assert_eq!(strategy.stage(61), Stage::Frequency);
        assert_eq!(strategy.stage(60), Stage::Exhaustive);
        assert_eq!(strategy.stage(3), Stage::Exhaustive);
        assert_eq!(strategy.stage(2), Stage::Random);
        assert_eq!(strategy.stage(1), Stage::Random);
    }

    #[test]
    fn exhaustive_stage_can_probe() {
        let candidates = words(&["bills", "fills", "hills", "mills"]);
        let mut all = candidates.clone();
        all.extend(words(&["bhmzz"]));

        let guess = with_context(2, &[], |ctx| {
            StagedStrategy::default().next_guess(&all, &candidates, ctx)
        });
        assert_eq!(guess.unwrap().text(), "bhmzz");
    }

    #[test]
    fn frequency_stage_stays_within_candidates() {
        let candidates = words(&["abbey", "trace", "crate", "grate", "eerie"]);
        let mut all = candidates.clone();
        all.extend(words(&["zzzzz"]));

        let guess = with_context(2, &[], |ctx| {
            StagedStrategy::new(3, 1).next_guess(&all, &candidates, ctx)
        });
        assert_eq!(guess.unwrap().text(), "trace");
    }
}
