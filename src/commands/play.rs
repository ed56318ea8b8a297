//! Single game command
//!
//! Plays one game against a given or randomly drawn answer.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::WordleError;
use crate::game::{GameConfig, GameRecord, Session};
use crate::solver::Strategy;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Play one game
///
/// Without an answer one is drawn from the dictionary with the same seeded
/// random source the strategy then uses.
///
/// # Errors
/// - `WordleError::InvalidWord` or `WordleError::UnknownWord` for a bad answer
/// - anything [`Session::play`] reports
pub fn play_game<S: Strategy>(
    dictionary: &Dictionary,
    strategy: S,
    config: GameConfig,
    seed: u64,
    answer: Option<&str>,
) -> Result<GameRecord, WordleError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let answer: Word = match answer {
        Some(text) => dictionary.lookup(text)?,
        None => dictionary.random_word(&mut rng).clone(),
    };
    log::info!("playing {answer} with the {} strategy", strategy.name());

    Session::new(dictionary, strategy, rng, config).play(&answer)
}
