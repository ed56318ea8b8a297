//! Guess selection strategies
//!
//! Defines the Strategy trait, the per-turn context handed to it, and the enum
//! used to pick a strategy at runtime.

use super::{ExhaustiveStrategy, FrequencyStrategy, OpeningStrategy, RandomStrategy, StagedStrategy};
use crate::core::{GuessResult, LetterPossibility, Word};
use crate::error::WordleError;
use rand::RngCore;

/// Everything a strategy may look at besides the word lists
pub struct TurnContext<'a> {
    /// 1-based number of the turn being played
    pub turn: usize,
    /// Results of the earlier turns, oldest first
    pub history: &'a [GuessResult],
    /// Letters not yet ruled out
    pub letters: &'a LetterPossibility,
    /// Random source owned by the game session
    pub rng: &'a mut dyn RngCore,
}

/// A strategy for choosing the next guess
pub trait Strategy {
    /// Short name used in output and on the command line
    fn name(&self) -> &'static str;

    /// Choose the next guess
    ///
    /// `all_words` is the whole dictionary and `candidates` the words still
    /// consistent with every grade. The guess may be any dictionary word; it
    /// does not have to be a candidate.
    ///
    /// Returns `None` only when there is nothing to guess.
    fn next_guess(
        &self,
        all_words: &[Word],
        candidates: &[Word],
        ctx: &mut TurnContext<'_>,
    ) -> Option<Word>;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn next_guess(
        &self,
        all_words: &[Word],
        candidates: &[Word],
        ctx: &mut TurnContext<'_>,
    ) -> Option<Word> {
        (**self).next_guess(all_words, candidates, ctx)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Uniform pick among the candidates
    Random(RandomStrategy),
    /// Candidate covering the most frequent letters
    Frequency(FrequencyStrategy),
    /// Word minimising the total remaining candidates
    Exhaustive(ExhaustiveStrategy),
    /// Frequency, then exhaustive, then random as candidates thin out
    Staged(StagedStrategy),
    /// Fixed opener with a tuned follow-up, then random or exhaustive
    Opening(OpeningStrategy),
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 5] = ["random", "frequency", "exhaustive", "staged", "opening"];

    /// Create strategy from name string
    ///
    /// # Errors
    /// Returns `WordleError::UnknownStrategy` for names outside [`Self::NAMES`].
    pub fn from_name(name: &str) -> Result<Self, WordleError> {
        match name.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random(RandomStrategy)),
            "frequency" | "freq" => Ok(Self::Frequency(FrequencyStrategy)),
            "exhaustive" | "minimum" => Ok(Self::Exhaustive(ExhaustiveStrategy)),
            "staged" => Ok(Self::Staged(StagedStrategy::default())),
            "opening" => Ok(Self::Opening(OpeningStrategy::default())),
            _ => Err(WordleError::UnknownStrategy(name.to_string())),
        }
    }
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Random(s) => s.name(),
            Self::Frequency(s) => s.name(),
            Self::Exhaustive(s) => s.name(),
            Self::Staged(s) => s.name(),
            Self::Opening(s) => s.name(),
        }
    }

    fn next_guess(
        &self,
        all_words: &[Word],
        candidates: &[Word],
        ctx: &mut TurnContext<'_>,
    ) -> Option<Word> {
        match self {
            Self::Random(s) => s.next_guess(all_words, candidates, ctx),
            Self::Frequency(s) => s.next_guess(all_words, candidates, ctx),
            Self::Exhaustive(s) => s.next_guess(all_words, candidates, ctx),
            Self::Staged(s) => s.next_guess(all_words, candidates, ctx),
            Self::Opening(s) => s.next_guess(all_words, candidates, ctx),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{with_context, words};
    use super::*;

    #[test]
    fn from_name_knows_every_listed_name() {
        for name in StrategyType::NAMES {
            let strategy = StrategyType::from_name(name).unwrap();
            assert_eq!(strategy.name(), name);
        }
        assert!(StrategyType::from_name("OPENING").is_ok());
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert!(matches!(
            StrategyType::from_name("entropy"),
            Err(WordleError::UnknownStrategy(ref n)) if n == "entropy"
        ));
    }

    #[test]
    fn every_strategy_answers_with_a_single_candidate() {
        let all = words(&["crane", "trace", "lares", "crone"]);
        let only = words(&["crone"]);
        for name in ["random", "frequency", "exhaustive", "staged"] {
            let strategy = StrategyType::from_name(name).unwrap();
            let guess = with_context(3, &[], |ctx| strategy.next_guess(&all, &only, ctx));
            assert_eq!(guess.unwrap().text(), "crone", "{name}");
        }
    }

    #[test]
    fn strategies_return_none_without_candidates() {
        let all = words(&["crane"]);
        for name in ["random", "frequency", "exhaustive", "staged"] {
            let strategy = StrategyType::from_name(name).unwrap();
            let guess = with_context(3, &[], |ctx| strategy.next_guess(&all, &[], ctx));
            assert!(guess.is_none(), "{name}");
        }
    }

    #[test]
    fn references_are_strategies() {
        let strategy = StrategyType::from_name("random").unwrap();
        let by_ref: &StrategyType = &strategy;
        let all = words(&["crane"]);
        let guess = with_context(1, &[], |ctx| by_ref.next_guess(&all, &all, ctx));
        assert_eq!(guess.unwrap().text(), "crane");
    }
}
