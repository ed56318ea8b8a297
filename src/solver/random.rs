//! Random strategy

use super::strategy::{Strategy, TurnContext};
use crate::core::Word;
use rand::seq::IndexedRandom;

/// Uniform pick among the remaining candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn next_guess(
        &self,
        _all_words: &[Word],
        candidates: &[Word],
        ctx: &mut TurnContext<'_>,
    ) -> Option<Word> {
        candidates.choose(&mut *ctx.rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::test_support::{with_context, words};

    #[test]
    fn picks_from_candidates_only() {
        let all = words(&["crane", "trace", "lares", "crone"]);
        let candidates = words(&["trace", "crone"]);

        with_context(2, &[], |ctx| {
            for _ in 0..20 {
                let guess = RandomStrategy.next_guess(&all, &candidates, ctx).unwrap();
                assert!(candidates.contains(&guess));
            }
        });
    }

    #[test]
    fn same_seed_same_guess() {
        let candidates = words(&["crane", "trace", "lares", "crone", "pound", "mouse"]);
        let first = with_context(1, &[], |ctx| RandomStrategy.next_guess(&candidates, &candidates, ctx));
        let second = with_context(1, &[], |ctx| RandomStrategy.next_guess(&candidates, &candidates, ctx));
        assert_eq!(first, second);
    }
}
