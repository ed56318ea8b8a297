//! Wordle Autoplay - CLI
//!
//! Lets the computer play Wordle against known answers, collect statistics
//! over the whole dictionary, rate opening words, and filter the dictionary
//! with grades from a real game.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use wordle_autoplay::{
    commands::{
        FitnessConfig, filter_dictionary, grade_guess, parse_results, play_game, run_fitness,
        run_stats,
    },
    dictionary::{DEFAULT_WORD_LENGTH, Dictionary, loader::load_from_file},
    game::{DEFAULT_MAX_TURNS, GameConfig},
    output::{
        CommentaryLog, print_filter, print_fitness, print_game, print_game_counts, print_grade,
        print_stats_summary,
    },
    solver::{Strategy, StrategyType},
};

#[derive(Parser)]
#[command(
    name = "wordle_autoplay",
    about = "Computer plays Wordle: grading, candidate elimination and guess strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: opening (default), staged, exhaustive, frequency, random
    #[arg(short, long, global = true, default_value = "opening")]
    strategy: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for every random choice (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Give up a game after this many guesses
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Word length of a dictionary file
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game (default)
    Play {
        /// The answer (random dictionary word when omitted)
        #[arg(short, long)]
        answer: Option<String>,

        /// Force the first guess
        #[arg(short, long)]
        opening: Option<String>,
    },

    /// Play every dictionary word as the answer
    Stats {
        /// Only play the first N answers
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Force the first guess
        #[arg(short, long)]
        opening: Option<String>,

        /// Write every game's guesses to this file
        #[arg(short, long)]
        commentary: Option<PathBuf>,
    },

    /// Rate words as the first guess
    Fitness {
        /// Words to rate
        words: Vec<String>,

        /// File with words to rate, one per line
        #[arg(short = 'f', long)]
        sample_file: Option<PathBuf>,

        /// Rate this many random dictionary words
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Score against this many random answers instead of every word
        #[arg(short, long)]
        answers: Option<usize>,

        /// How many of the best words to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// List the dictionary words consistent with guess:grade results
    Filter {
        /// Results such as lares:01110 (2 exact, 1 present, 0 absent)
        #[arg(required = true)]
        results: Vec<String>,
    },

    /// Grade a guess against an answer
    Grade { answer: String, guess: String },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the dictionary named by the -d flag
fn load_dictionary(source: &str, length: usize) -> Result<Dictionary> {
    if source == "embedded" {
        if length != DEFAULT_WORD_LENGTH {
            bail!("the embedded dictionary only has {DEFAULT_WORD_LENGTH}-letter words");
        }
        return Ok(Dictionary::embedded()?);
    }

    let dictionary = load_from_file(source, length)
        .with_context(|| format!("failed to load dictionary {source}"))?;
    log::info!("Dictionary contains {} words.", dictionary.len());
    Ok(dictionary)
}

fn game_config(dictionary: &Dictionary, max_turns: usize, opening: Option<&str>) -> Result<GameConfig> {
    let opening = opening
        .map(|text| dictionary.lookup(text))
        .transpose()
        .context("invalid opening word")?;
    Ok(GameConfig::new(max_turns).with_opening(opening))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        answer: None,
        opening: None,
    });

    let dictionary = load_dictionary(&cli.dictionary, cli.length)?;
    let strategy = StrategyType::from_name(&cli.strategy)?;
    run_command(command, &dictionary, strategy, seed, cli.max_turns)
}

fn run_command(
    command: Commands,
    dictionary: &Dictionary,
    strategy: StrategyType,
    seed: u64,
    max_turns: usize,
) -> Result<()> {
    match command {
        Commands::Play { answer, opening } => {
            let config = game_config(dictionary, max_turns, opening.as_deref())?;
            let name = strategy.name();
            let record = play_game(dictionary, strategy, config, seed, answer.as_deref())?;
            print_game(&record, name);
        }
        Commands::Stats {
            limit,
            opening,
            commentary,
        } => {
            let config = game_config(dictionary, max_turns, opening.as_deref())?;
            let stats = run_stats(dictionary, &strategy, &config, seed, limit)?;

            if let Some(path) = commentary {
                let file = File::create(&path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                CommentaryLog::new(BufWriter::new(file))
                    .record_all(&stats.records)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }

            print_game_counts(&stats.records);
            print_stats_summary(&stats);
        }
        Commands::Fitness {
            words,
            sample_file,
            sample,
            answers,
            top,
        } => {
            let config = FitnessConfig {
                words,
                sample_file,
                sample,
                answers,
                top,
            };
            let mut rng = StdRng::seed_from_u64(seed);
            let report = run_fitness(dictionary, &config, &mut rng)?;
            print_fitness(&report);
        }
        Commands::Filter { results } => {
            let results = parse_results(&results)?;
            let outcome = filter_dictionary(dictionary, &results)?;
            print_filter(&outcome);
        }
        Commands::Grade { answer, guess } => {
            print_grade(&grade_guess(&answer, &guess)?);
        }
    }
    Ok(())
}
