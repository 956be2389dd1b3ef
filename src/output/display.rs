//! Display functions for command results

use super::formatters::histogram_chart;
use crate::commands::{DeduceResult, ExploreResult};
use colored::Colorize;

/// Print the result of an exploration run
pub fn print_explore_result(result: &ExploreResult, show_histogram: bool, histogram_width: usize) {
    let eval = &result.evaluation;
    let guess = eval.best_guess.as_ref().map_or("-", |w| w.text());

    println!("\n{}", "─".repeat(60).cyan());
    println!("Pool: {} words", result.pool_size);
    if let Some(first) = &result.forced_first {
        println!("Forced first guess: {}", first.text().to_uppercase());
    }
    println!(
        "{} {}",
        format!("{:.5}", eval.score).bright_yellow().bold(),
        guess.to_uppercase().bright_green().bold()
    );
    println!(
        "Time: {:.2}s | cache entries written: {}",
        result.duration.as_secs_f64(),
        result.cache_entries_written
    );

    if !eval.failures.is_empty() {
        println!(
            "\n{} {} word(s) not resolved within the depth bound:",
            "✗".red().bold(),
            eval.failures.len()
        );
        for word in eval.failures.iter().take(10) {
            println!("  {}", word.text().to_uppercase().yellow());
        }
        if eval.failures.len() > 10 {
            println!("  … and {} more", eval.failures.len() - 10);
        }
    }

    if show_histogram {
        let chart = histogram_chart(&eval.histogram, histogram_width);
        if !chart.is_empty() {
            println!("\n{}", "Turn distribution".bright_cyan().bold());
            println!("{chart}");
        }
    }
}

/// Print the result of a deduction run
///
/// The remaining words go to stdout one per line, pipe-friendly.
pub fn print_deduce_result(result: &DeduceResult) {
    println!(
        "{}",
        format!(
            "Started with {} possible solutions; {} observation(s) against {} known patterns",
            result.starting_candidates, result.observations, result.table_patterns
        )
        .cyan()
    );
    println!(
        "{}",
        format!("{} candidate(s) remain:", result.remaining.len())
            .bright_cyan()
            .bold()
    );
    for word in &result.remaining {
        println!("{}", word.text());
    }
}
