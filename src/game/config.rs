//! Game configuration

use crate::core::Word;

/// Turn limit used when none is given
pub const DEFAULT_MAX_TURNS: usize = 100;

/// Settings for one game session
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Games stop unsolved after this many guesses
    pub max_turns: usize,

    /// Forced first guess; the strategy picks when `None`
    pub opening: Option<Word>,

    /// Candidates at the start of every game; the whole dictionary when `None`
    pub starting_candidates: Option<Vec<Word>>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_turns: usize) -> Self {
        Self {
            max_turns,
            opening: None,
            starting_candidates: None,
        }
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Option<Word>) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub fn with_starting_candidates(mut self, candidates: Vec<Word>) -> Self {
        self.starting_candidates = Some(candidates);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}
