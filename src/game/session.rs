//! Game session
//!
//! Coordinates one strategy, one random source and one dictionary across as
//! many games as the caller wants to play.

use super::{GameConfig, GameRecord, TurnRecord};
use crate::core::{CandidateSet, GuessResult, LetterPossibility, Word};
use crate::dictionary::Dictionary;
use crate::error::WordleError;
use crate::solver::{Strategy, TurnContext};
use log::{debug, info};
use rand::RngCore;

/// Plays games against known answers
pub struct Session<'d, S: Strategy, R: RngCore> {
    dictionary: &'d Dictionary,
    strategy: S,
    rng: R,
    config: GameConfig,
}

impl<'d, S: Strategy, R: RngCore> Session<'d, S, R> {
    pub const fn new(dictionary: &'d Dictionary, strategy: S, rng: R, config: GameConfig) -> Self {
        Self {
            dictionary,
            strategy,
            rng,
            config,
        }
    }

    /// Play one game until the answer is guessed or the turn limit runs out
    ///
    /// The answer does not have to be in the dictionary, but then the
    /// candidates will run dry before it is found.
    ///
    /// # Errors
    /// - `WordleError::InvalidLength` if the answer length differs from the dictionary's
    /// - `WordleError::UnknownWord` if a guess is not in the dictionary
    /// - `WordleError::NoGuess` if the strategy gives up
    /// - `WordleError::EmptyCandidateSet` if a grade eliminates every candidate
    pub fn play(&mut self, answer: &Word) -> Result<GameRecord, WordleError> {
        let word_length = self.dictionary.word_length();
        if answer.len() != word_length {
            return Err(WordleError::InvalidLength {
                expected: word_length,
                found: answer.len(),
            });
        }

        let mut candidates = CandidateSet::new(
            self.config
                .starting_candidates
                .clone()
                .unwrap_or_else(|| self.dictionary.words().to_vec()),
        );
        let mut letters = LetterPossibility::new();
        let mut history: Vec<GuessResult> = Vec::new();
        let mut turns = Vec::new();

        for turn in 1..=self.config.max_turns {
            let guess = self.choose_guess(turn, &history, &letters, candidates.words())?;
            if !self.dictionary.contains(&guess) {
                return Err(WordleError::UnknownWord(guess.to_string()));
            }

            let result = GuessResult::score(answer, &guess)?;
            letters.update(&result);

            let candidates_before = candidates.len();
            let solved = result.is_solved();
            let candidates_after = if solved {
                1
            } else {
                candidates.apply(&result)?
            };

            debug!("{answer}: turn {turn} {result}, {candidates_before} -> {candidates_after}");

            turns.push(TurnRecord {
                guess,
                grade: result.grade().clone(),
                candidates_before,
                candidates_after,
            });

            if solved {
                return Ok(GameRecord {
                    answer: answer.clone(),
                    turns,
                    solved: true,
                });
            }
            history.push(result);
        }

        info!(
            "{answer}: gave up after {} turns with {} candidates left",
            self.config.max_turns,
            candidates.len()
        );
        Ok(GameRecord {
            answer: answer.clone(),
            turns,
            solved: false,
        })
    }

    fn choose_guess(
        &mut self,
        turn: usize,
        history: &[GuessResult],
        letters: &LetterPossibility,
        candidates: &[Word],
    ) -> Result<Word, WordleError> {
        if turn == 1 {
            if let Some(opening) = &self.config.opening {
                return Ok(opening.clone());
            }
        }

        let mut ctx = TurnContext {
            turn,
            history,
            letters,
            rng: &mut self.rng,
        };
        self.strategy
            .next_guess(self.dictionary.words(), candidates, &mut ctx)
            .ok_or_else(|| WordleError::NoGuess(self.strategy.name()))
    }
}
