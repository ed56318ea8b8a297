//! Opening word fitness
//!
//! Measures how well each word works as a first guess: the candidates it
//! leaves behind, summed over a set of answers.

use crate::core::{Word, grade};
use crate::dictionary::{Dictionary, loader};
use crate::error::WordleError;
use crate::output::formatters::progress_bar;
use crate::solver::exhaustive::group_by_grade;
use log::info;
use rand::Rng;
use rayon::prelude::*;
use std::path::PathBuf;

/// Where the words to evaluate and the answers to score them against come from
#[derive(Debug, Clone, Default)]
pub struct FitnessConfig {
    /// Words given directly
    pub words: Vec<String>,
    /// File with one word per line
    pub sample_file: Option<PathBuf>,
    /// Evaluate this many random dictionary words
    pub sample: Option<usize>,
    /// Score against this many random answers instead of the whole dictionary
    pub answers: Option<usize>,
    /// How many of the best words to report
    pub top: usize,
}

/// Fitness of one opening word
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessResult {
    pub guess: Word,
    /// Candidates remaining, summed over every answer
    pub total: usize,
    /// `total` divided by the number of answers
    pub average: f64,
}

#[derive(Debug)]
pub struct FitnessReport {
    /// One result per evaluated word, in the order given
    pub results: Vec<FitnessResult>,
    pub answers: usize,
    pub top: usize,
}

impl FitnessReport {
    /// The `top` lowest totals, earlier words first on ties
    #[must_use]
    pub fn best(&self) -> Vec<&FitnessResult> {
        let mut ranked: Vec<&FitnessResult> = self.results.iter().collect();
        ranked.sort_by_key(|r| r.total);
        ranked.truncate(self.top);
        ranked
    }
}

/// Candidates left by `guess`, summed over every answer
///
/// Each answer is graded against `guess` and the dictionary reduced with that
/// grade. Grading every candidate once and counting shared grades gives the
/// same sum.
#[must_use]
pub fn opening_fitness(guess: &Word, answers: &[Word], candidates: &[Word]) -> usize {
    let groups = group_by_grade(guess, candidates);
    answers
        .iter()
        .filter_map(|answer| grade(answer, guess).ok())
        .map(|g| groups.get(&g).copied().unwrap_or(0))
        .sum()
}

/// Evaluate every guess in parallel, keeping the input order
#[must_use]
pub fn evaluate_openings(
    guesses: &[Word],
    answers: &[Word],
    candidates: &[Word],
) -> Vec<FitnessResult> {
    let pb = progress_bar(guesses.len() as u64);
    let results = guesses
        .par_iter()
        .map(|guess| {
            let total = opening_fitness(guess, answers, candidates);
            pb.inc(1);
            FitnessResult {
                guess: guess.clone(),
                total,
                average: if answers.is_empty() {
                    0.0
                } else {
                    total as f64 / answers.len() as f64
                },
            }
        })
        .collect();
    pb.finish_and_clear();
    results
}

/// Resolve the words and answers described by `config` and evaluate them
///
/// With no words, file or sample size, every dictionary word is evaluated.
///
/// # Errors
/// - `WordleError::Io` if the sample file cannot be read
/// - `WordleError::InvalidWord` or `WordleError::UnknownWord` for a listed word
///   that is not a dictionary word
pub fn run_fitness<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: &FitnessConfig,
    rng: &mut R,
) -> Result<FitnessReport, WordleError> {
    let mut guesses = config
        .words
        .iter()
        .map(|text| dictionary.lookup(text))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(path) = &config.sample_file {
        for text in loader::read_word_list(path)? {
            guesses.push(dictionary.lookup(&text)?);
        }
    }

    if let Some(amount) = config.sample {
        guesses.extend(dictionary.sample(amount, rng));
    }

    if config.words.is_empty() && config.sample_file.is_none() && config.sample.is_none() {
        guesses = dictionary.words().to_vec();
    }

    let answers = match config.answers {
        Some(amount) => dictionary.sample(amount, rng),
        None => dictionary.words().to_vec(),
    };

    info!(
        "evaluating {} opening words against {} answers",
        guesses.len(),
        answers.len()
    );

    Ok(FitnessReport {
        results: evaluate_openings(&guesses, &answers, dictionary.words()),
        answers: answers.len(),
        top: config.top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessResult, reduce};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn fitness_matches_reduction() {
        let dictionary = Dictionary::embedded().unwrap();
        let candidates = dictionary.words();
        let answers = words(&["crane", "abbey", "pound", "geese", "llama"]);

        for guess in words(&["lares", "compt", "mamma"]) {
            let expected: usize = answers
                .iter()
                .map(|answer| {
                    let result = GuessResult::score(answer, &guess).unwrap();
                    reduce(candidates, &result).len()
                })
                .sum();
            assert_eq!(opening_fitness(&guess, &answers, candidates), expected, "{guess}");
        }
    }

    #[test]
    fn fitness_fixture() {
        let candidates = words(&["lares", "crane", "trace", "crone"]);
        let lares = Word::new("lares").unwrap();
        // lares alone, crane and trace together, crone alone
        assert_eq!(opening_fitness(&lares, &candidates, &candidates), 6);
    }

    #[test]
    fn results_keep_input_order() {
        let candidates = words(&["lares", "crane", "trace", "crone"]);
        let guesses = words(&["crone", "zzzzz", "lares"]);
        let results = evaluate_openings(&guesses, &candidates, &candidates);

        let order: Vec<&str> = results.iter().map(|r| r.guess.text()).collect();
        assert_eq!(order, ["crone", "zzzzz", "lares"]);
        assert_eq!(results[1].total, 16);
        assert!((results[1].average - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn best_is_sorted_and_truncated() {
        let candidates = words(&["lares", "crane", "trace", "crone"]);
        let guesses = words(&["zzzzz", "crone", "lares"]);
        let report = FitnessReport {
            results: evaluate_openings(&guesses, &candidates, &candidates),
            answers: candidates.len(),
            top: 2,
        };
        let best: Vec<&str> = report.best().iter().map(|r| r.guess.text()).collect();
        assert_eq!(best.len(), 2);
        assert_ne!(best[0], "zzzzz");
        assert_ne!(best[1], "zzzzz");
    }

    #[test]
    fn words_from_arguments_and_file() {
        let dictionary = Dictionary::embedded().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\n\ntrace").unwrap();

        let config = FitnessConfig {
            words: vec!["lares".to_string()],
            sample_file: Some(file.path().to_path_buf()),
            answers: Some(30),
            top: 3,
            ..FitnessConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let report = run_fitness(&dictionary, &config, &mut rng).unwrap();

        let order: Vec<&str> = report.results.iter().map(|r| r.guess.text()).collect();
        assert_eq!(order, ["lares", "crane", "trace"]);
        assert_eq!(report.answers, 30);
    }

    #[test]
    fn random_sample_of_words() {
        let dictionary = Dictionary::embedded().unwrap();
        let config = FitnessConfig {
            sample: Some(4),
            answers: Some(10),
            top: 2,
            ..FitnessConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let report = run_fitness(&dictionary, &config, &mut rng).unwrap();
        assert_eq!(report.results.len(), 4);
        assert_eq!(report.best().len(), 2);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let dictionary = Dictionary::embedded().unwrap();
        let config = FitnessConfig {
            words: vec!["qqqqq".to_string()],
            ..FitnessConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        assert!(matches!(
            run_fitness(&dictionary, &config, &mut rng),
            Err(WordleError::UnknownWord(_))
        ));
    }
}
