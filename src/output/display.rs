//! Display functions for command results

use super::formatters::{colored_guess, create_bar};
use crate::commands::{FilterOutcome, FitnessReport, StatsSummary};
use crate::core::GuessResult;
use crate::game::GameRecord;
use colored::Colorize;

/// Print one game turn by turn
pub fn print_game(record: &GameRecord, strategy: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Answer: {}   Strategy: {}",
        record.answer.text().to_uppercase().bright_yellow().bold(),
        strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in record.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&turn.guess, &turn.grade),
            turn.grade.to_emoji()
        );
        println!(
            "  Reduced the options from {} to {} words",
            turn.candidates_before, turn.candidates_after
        );
    }

    println!();
    if record.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", record.guess_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Gave up after {} guesses", record.guess_count())
                .red()
                .bold()
        );
    }
}

/// Print a single grade
pub fn print_grade(result: &GuessResult) {
    println!(
        "{}  {}  {}",
        result.grade(),
        colored_guess(result.guess(), result.grade()),
        result.grade().to_emoji()
    );
}

/// Print the words left by `filter`
pub fn print_filter(outcome: &FilterOutcome) {
    let words = outcome.candidates.words();
    println!(
        "{} {}",
        words.len().to_string().bright_yellow().bold(),
        if words.len() == 1 { "word left" } else { "words left" }
    );
    if !outcome.ruled_out.is_empty() {
        let letters: String = outcome.ruled_out.iter().collect();
        println!("Ruled out: {}", letters.to_uppercase().bright_black());
    }
    for chunk in words.chunks(10) {
        let line: Vec<&str> = chunk.iter().map(|w| w.text()).collect();
        println!("  {}", line.join(" "));
    }
}

/// Print `answer count` for every game, in the order played
pub fn print_game_counts(records: &[GameRecord]) {
    for record in records {
        if record.solved {
            println!("{} {}", record.answer, record.guess_count());
        } else {
            println!("{} {} {}", record.answer, record.guess_count(), "unsolved".red());
        }
    }
}

/// Print the summary of a stats run
pub fn print_stats_summary(stats: &StatsSummary) {
    let total = stats.total_games().max(1) as f64;

    println!("\n{}", "═".repeat(70));
    println!(" Results: {} strategy ", stats.strategy);
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:        {}", stats.total_games());
    println!(
        "  Solved:              {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Gave up:             {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per game:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for (guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_bar(count, max_count, 40);
        println!("  {guesses:3} guesses: {} {count:5} ({percentage:5.1}%)", bar.green());
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in &stats.worst_words {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    println!("\n🎯 First Guess Usage");
    for (word, count) in stats.first_guess_used.iter().take(5) {
        println!(
            "  {}: {} times ({:.1}%)",
            word.to_uppercase(),
            count,
            *count as f64 / total * 100.0
        );
    }
}

/// Print `guess total average` for every evaluated word, then the best ones
pub fn print_fitness(report: &FitnessReport) {
    for result in &report.results {
        println!("{} {} {:.3}", result.guess, result.total, result.average);
    }

    let best = report.best();
    if best.is_empty() {
        return;
    }

    println!(
        "\n🏆 {} (against {} answers)",
        format!("Top {}", best.len()).bright_cyan().bold(),
        report.answers
    );
    for (rank, result) in best.iter().enumerate() {
        println!(
            "  {:3}. {}  {:>8}  {}",
            rank + 1,
            result.guess.text().to_uppercase().bright_green(),
            result.total,
            format!("{:.3}", result.average).bright_yellow()
        );
    }
}
