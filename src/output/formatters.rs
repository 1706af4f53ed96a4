//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use crate::game::GuessVerdict;
use crate::grid::{Row, RowStatus};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, feedback: Option<LetterFeedback>) -> ColoredString {
    let tile = format!(" {letter} ");
    match feedback {
        Some(LetterFeedback::Correct) => tile.black().on_green().bold(),
        Some(LetterFeedback::Present) => tile.black().on_yellow().bold(),
        Some(LetterFeedback::Absent) => tile.white().on_bright_black().bold(),
        None => tile.bold(),
    }
}

/// A scored word as a strip of colored tiles
#[must_use]
pub fn feedback_tiles(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.letters())
        .map(|(letter, kind)| letter_tile(letter, Some(*kind)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A grid row as tiles; empty cells show as placeholders
#[must_use]
pub fn row_tiles(row: &Row) -> String {
    let feedback = row.feedback().map(Feedback::letters);
    row.cells()
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell.value() {
            Some(letter) => {
                let kind = feedback.and_then(|f| f.get(i).copied());
                letter_tile(letter, kind).to_string()
            }
            None if row.status() == RowStatus::Active => " _ ".to_string(),
            None => " · ".dimmed().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Verdict as a short colored label
#[must_use]
pub fn verdict_label(verdict: GuessVerdict) -> ColoredString {
    match verdict {
        GuessVerdict::Accepted => "valid word".green().bold(),
        GuessVerdict::RejectedIncomplete => verdict.message().yellow(),
        GuessVerdict::RejectedInvalidWord => verdict.message().red(),
        GuessVerdict::RejectedNetworkError => verdict.message().bright_red(),
    }
}
