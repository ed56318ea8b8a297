//! Formatting utilities for terminal output

use crate::core::{Grade, Mark, Word};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// One letter on its grade color: green for Exact, yellow for Present,
/// black for Absent
#[must_use]
pub fn colored_letter(letter: char, mark: Mark) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase()).white().bold();
    match mark {
        Mark::Exact => tile.on_green(),
        Mark::Present => tile.on_yellow(),
        Mark::Absent => tile.on_black(),
    }
}

/// A graded guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, grade: &Grade) -> String {
    guess
        .text()
        .chars()
        .zip(grade.marks())
        .map(|(letter, &mark)| colored_letter(letter, mark).to_string())
        .collect()
}

/// Create a bar string with `value / max` of `width` filled
#[must_use]
pub fn create_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).max(usize::from(value > 0)).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for batch runs, drawn on stderr
#[must_use]
pub fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░")),
        Err(e) => log::warn!("progress bar template rejected: {e}"),
    }
    pb
}
