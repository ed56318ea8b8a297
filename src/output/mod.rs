//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod commentary;
pub mod display;
pub mod formatters;

pub use commentary::CommentaryLog;
pub use display::{
    print_filter, print_fitness, print_game, print_game_counts, print_grade, print_stats_summary,
};
