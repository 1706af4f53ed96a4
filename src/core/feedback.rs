//! Per-letter feedback for a locked-in guess
//!
//! Each letter of a guess is classified against the target:
//! - `Correct`: right letter in the right position
//! - `Present`: letter occurs elsewhere in the target
//! - `Absent`: letter does not occur (or every occurrence is already accounted for)

use super::Word;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl LetterFeedback {
    /// Emoji square used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole row, one entry per cell in cell order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Score `guess` against `answer`
    ///
    /// Implements Wordle's rules including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and reserve them from the answer's letter pool
    /// 2. Second pass: mark `present` only while unreserved occurrences remain
    ///
    /// Positions past the end of the shorter word are `Absent`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &answer);
    /// assert_eq!(feedback.letters(), &[Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess_letters = guess.letters();
        let answer_letters = answer.letters();
        let mut result = vec![LetterFeedback::Absent; guess_letters.len()];
        let mut available = answer.letter_counts();

        for (i, (&g, &a)) in guess_letters.iter().zip(answer_letters).enumerate() {
            if g == a {
                result[i] = LetterFeedback::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &letter) in guess_letters.iter().enumerate() {
            if result[i] == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-letter classifications in cell order
    #[must_use]
    pub fn letters(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&f| f == LetterFeedback::Correct)
    }

    /// Count letters with the given classification
    #[must_use]
    pub fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Render as a string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
