//! Score a guess against a known answer, offline

use crate::core::{Feedback, Word};

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `answer` with the same rules the game uses
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn score_guess(guess: &str, answer: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("guess: {e}"))?;
    let answer = Word::new(answer).map_err(|e| format!("answer: {e}"))?;

    if guess.len() != answer.len() {
        return Err(format!(
            "guess has {} letters but the answer has {}",
            guess.len(),
            answer.len()
        ));
    }

    let feedback = Feedback::calculate(&guess, &answer);
    Ok(ScoreResult {
        guess,
        answer,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_duplicates_once() {
        let result = score_guess("lolly", "alloy").unwrap();
        assert_eq!(result.feedback.to_emoji(), "🟨🟨🟩⬜🟩");
        assert_eq!(result.guess.text(), "LOLLY");
    }

    #[test]
    fn perfect_guess() {
        assert!(score_guess("Crane", "CRANE").unwrap().feedback.is_perfect());
    }

    #[test]
    fn length_mismatch_rejected() {
        let err = score_guess("cranes", "crane").unwrap_err();
        assert!(err.contains("6 letters"));
    }

    #[test]
    fn malformed_words_rejected() {
        assert!(score_guess("cr4ne", "crane").unwrap_err().starts_with("guess"));
        assert!(score_guess("crane", "").unwrap_err().starts_with("answer"));
    }
}
