//! Display functions for command results

use super::formatters::{feedback_tiles, row_tiles, verdict_label};
use crate::commands::{CheckResult, ScoreResult};
use crate::game::Outcome;
use crate::grid::Grid;
use colored::Colorize;

/// Print every row of the board, one line each
pub fn print_board(grid: &Grid) {
    println!();
    for row in grid.rows() {
        println!("   {}", row_tiles(row));
    }
    println!();
}

/// Print how the session ended, plus the share text if any
pub fn print_outcome(outcome: &Outcome, share: Option<&str>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match outcome {
        Outcome::Won { guesses } => {
            let praise = match guesses {
                1 => "🏆 Genius!",
                2 => "⭐ Magnificent!",
                3 => "💫 Impressive!",
                4 => "✨ Splendid!",
                5 => "👍 Great!",
                _ => "✓ Phew!",
            };
            println!(
                "   {} {}",
                praise.bright_green().bold(),
                format!("Solved in {guesses}").green()
            );
        }
        Outcome::Lost { answer } => {
            println!(
                "   {} The word was {}",
                "❌ Out of guesses.".red().bold(),
                answer.text().bright_yellow().bold()
            );
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());

    if let Some(share) = share {
        println!("\n{share}\n");
    }
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!(
        "{} ({}): {}",
        result.word.text().bright_yellow().bold(),
        result.dictionary.dimmed(),
        verdict_label(result.verdict)
    );
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n   {}   {}\n",
        feedback_tiles(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
}
