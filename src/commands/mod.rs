//! Command implementations

pub mod filter;
pub mod fitness;
pub mod grade;
pub mod play;
pub mod stats;

pub use filter::{FilterOutcome, filter_dictionary, parse_results};
pub use fitness::{FitnessConfig, FitnessReport, FitnessResult, run_fitness};
pub use grade::grade_guess;
pub use play::play_game;
pub use stats::{StatsSummary, run_stats};
