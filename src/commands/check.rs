//! Check a single word against the dictionary

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::game::{GuessVerdict, validate};
use crate::grid::Row;

/// Result of checking one word
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub word: Word,
    pub dictionary: String,
    pub verdict: GuessVerdict,
}

/// Run `word` through the same validation a submitted row goes through
///
/// # Errors
///
/// Returns an error if `word` contains anything but ASCII letters.
pub async fn check_word(dictionary: &dyn Dictionary, word: &str) -> Result<CheckResult, String> {
    let word = Word::new(word).map_err(|e| e.to_string())?;

    let mut row = Row::new(word.len());
    row.activate();
    for (i, letter) in word.text().chars().enumerate() {
        if let Some(cell) = row.cell_mut(i) {
            cell.write(letter);
        }
    }

    let verdict = validate(&row, dictionary).await;
    Ok(CheckResult {
        word,
        dictionary: dictionary.name().to_string(),
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::fake::FakeDictionary;

    #[tokio::test]
    async fn known_and_unknown_words() {
        let dictionary = FakeDictionary::new("crane", &["slate"]);

        let result = check_word(&dictionary, "Slate").await.unwrap();
        assert_eq!(result.word.text(), "SLATE");
        assert_eq!(result.verdict, GuessVerdict::Accepted);
        assert_eq!(result.dictionary, "fake");

        let result = check_word(&dictionary, "zzzzz").await.unwrap();
        assert_eq!(result.verdict, GuessVerdict::RejectedInvalidWord);
    }

    #[tokio::test]
    async fn unreachable_dictionary() {
        let dictionary = FakeDictionary::new("crane", &[]);
        dictionary.set_fail_lookups(true);

        let result = check_word(&dictionary, "crane").await.unwrap();
        assert_eq!(result.verdict, GuessVerdict::RejectedNetworkError);
    }

    #[tokio::test]
    async fn malformed_input_is_an_error() {
        let dictionary = FakeDictionary::new("crane", &[]);
        assert!(check_word(&dictionary, "cr4ne").await.is_err());
        assert!(check_word(&dictionary, "").await.is_err());
        assert_eq!(dictionary.lookups(), 0);
    }
}
