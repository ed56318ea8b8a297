//! Guess selection strategies
//!
//! Every strategy sees the whole dictionary and the current candidates and
//! returns one word to guess next.

pub mod exhaustive;
mod frequency;
mod opening;
mod random;
mod staged;
pub mod strategy;

pub use exhaustive::ExhaustiveStrategy;
pub use frequency::{FrequencyStrategy, frequency_score, letter_frequencies};
pub use opening::OpeningStrategy;
pub use random::RandomStrategy;
pub use staged::{Stage, StagedStrategy};
pub use strategy::{Strategy, StrategyType, TurnContext};
