//! Display functions for command results

use super::formatters::format_path;
use crate::commands::{CheckResult, Puzzle};
use colored::Colorize;

/// Print randomly drawn puzzles
pub fn print_puzzles(puzzles: &[Puzzle]) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "RANDOM PUZZLES".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    for (i, puzzle) in puzzles.iter().enumerate() {
        println!(
            "  {}. {} → {}",
            (i + 1).to_string().bright_black(),
            puzzle.start.to_uppercase().bright_yellow().bold(),
            puzzle.target.to_uppercase().bright_cyan().bold()
        );
    }
    println!();
}

/// Print the result of checking a ladder
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.target.to_uppercase().bright_cyan().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let mark = if step.outcome.is_accepted() {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("  {:>2}. {mark} {}", i + 1, step.word.to_uppercase());
    }

    println!();
    if let Some((position, word, reason)) = result.first_rejection() {
        println!(
            "{}",
            format!("❌ Step {position} ({}) refused: {reason}", word.to_uppercase())
                .red()
                .bold()
        );
    } else if result.solved {
        let words: Vec<String> = std::iter::once(result.start.clone())
            .chain(result.steps.iter().map(|step| step.word.clone()))
            .collect();
        println!(
            "{}",
            format!("✅ Valid ladder in {} steps", result.steps.len())
                .green()
                .bold()
        );
        println!("   {}", format_path(&words));
    } else {
        println!("{}", "❌ Ladder does not reach the target".red().bold());
    }
}
