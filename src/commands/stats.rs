//! Play every answer - strategy evaluation
//!
//! Runs a strategy against every dictionary word (or the first `limit`) as the
//! answer and summarises how many guesses it needed.

use crate::dictionary::Dictionary;
use crate::error::WordleError;
use crate::game::{GameConfig, GameRecord, Session};
use crate::output::formatters::progress_bar;
use crate::solver::Strategy;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How many of the hardest answers a summary keeps
const WORST_WORDS: usize = 10;

/// Results of playing many games
#[derive(Debug)]
pub struct StatsSummary {
    pub strategy: &'static str,
    /// One record per answer, in dictionary order
    pub records: Vec<GameRecord>,
    pub solved: usize,
    pub failed: usize,
    /// Guess count -> number of solved games
    pub guess_distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved answers needing the most guesses, hardest first
    pub worst_words: Vec<(String, usize)>,
    /// First guesses with how often each was played, most used first
    pub first_guess_used: Vec<(String, usize)>,
    pub total_time: Duration,
}

impl StatsSummary {
    #[must_use]
    pub fn from_records(
        strategy: &'static str,
        records: Vec<GameRecord>,
        total_time: Duration,
    ) -> Self {
        let solved: Vec<&GameRecord> = records.iter().filter(|r| r.solved).collect();
        let solved_count = solved.len();
        let failed = records.len() - solved_count;

        let mut guess_distribution = BTreeMap::new();
        for record in &solved {
            *guess_distribution.entry(record.guess_count()).or_insert(0) += 1;
        }

        let total_guesses: usize = solved.iter().map(|r| r.guess_count()).sum();
        let average_guesses = if solved_count > 0 {
            total_guesses as f64 / solved_count as f64
        } else {
            0.0
        };

        let min_guesses = solved.iter().map(|r| r.guess_count()).min().unwrap_or(0);
        let max_guesses = solved.iter().map(|r| r.guess_count()).max().unwrap_or(0);

        let mut worst_words: Vec<(String, usize)> = solved
            .iter()
            .map(|r| (r.answer.to_string(), r.guess_count()))
            .collect();
        worst_words.sort_by_key(|(_, n)| Reverse(*n));
        worst_words.truncate(WORST_WORDS);

        let mut first_counts: FxHashMap<String, usize> = FxHashMap::default();
        for first in records.iter().filter_map(GameRecord::first_guess) {
            *first_counts.entry(first.to_string()).or_insert(0) += 1;
        }
        let mut first_guess_used: Vec<(String, usize)> = first_counts.into_iter().collect();
        first_guess_used.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            strategy,
            records,
            solved: solved_count,
            failed,
            guess_distribution,
            average_guesses,
            min_guesses,
            max_guesses,
            worst_words,
            first_guess_used,
            total_time,
        }
    }

    #[must_use]
    pub fn total_games(&self) -> usize {
        self.records.len()
    }
}

/// Seed for the game at `index`, so every game replays the same way
/// whatever thread runs it
#[must_use]
pub const fn game_seed(seed: u64, index: usize) -> u64 {
    seed.wrapping_add(index as u64)
}

/// Play every dictionary word (or the first `limit`) as the answer
///
/// Games run in parallel, each with its own random source seeded from `seed`
/// and the answer's position. Records come back in dictionary order.
///
/// # Errors
/// The first error any game reports.
pub fn run_stats<S: Strategy + Sync>(
    dictionary: &Dictionary,
    strategy: &S,
    config: &GameConfig,
    seed: u64,
    limit: Option<usize>,
) -> Result<StatsSummary, WordleError> {
    let answers = &dictionary.words()[..limit.unwrap_or(usize::MAX).min(dictionary.len())];
    info!(
        "playing {} games with the {} strategy",
        answers.len(),
        strategy.name()
    );

    let pb = progress_bar(answers.len() as u64);
    let start = Instant::now();

    let records = answers
        .par_iter()
        .enumerate()
        .map(|(index, answer)| {
            let rng = StdRng::seed_from_u64(game_seed(seed, index));
            let record = Session::new(dictionary, strategy, rng, config.clone()).play(answer);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("done");
    let total_time = start.elapsed();
    info!("finished in {:.2}s", total_time.as_secs_f64());

    Ok(StatsSummary::from_records(
        strategy.name(),
        records,
        total_time,
    ))
}
