//! What happened during a game

use crate::core::{Grade, Word};

/// A single turn of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Word,
    pub grade: Grade,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub answer: Word,
    pub turns: Vec<TurnRecord>,
    /// False when the turn limit ran out first
    pub solved: bool,
}

impl GameRecord {
    /// Number of guesses made
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.turns.len()
    }

    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.turns.iter().map(|turn| &turn.guess)
    }

    #[must_use]
    pub fn first_guess(&self) -> Option<&Word> {
        self.turns.first().map(|turn| &turn.guess)
    }
}
