//! Offline word lists
//!
//! Embedded at build time so the game can run without a dictionary service.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ANSWERS};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lists_are_not_empty() {
        assert!(!ANSWERS.is_empty());
        assert!(ALLOWED.len() >= ANSWERS.len());
    }

    #[test]
    fn entries_are_uppercase_five_letter_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.bytes().all(|b| b.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed: HashSet<_> = ALLOWED.iter().collect();
        for answer in ANSWERS {
            assert!(allowed.contains(answer), "Answer '{answer}' not in allowed list");
        }
    }

    #[test]
    fn duplicate_letter_examples_are_present() {
        assert!(ALLOWED.contains(&"ALLOY"));
        assert!(ALLOWED.contains(&"LOLLY"));
        assert!(!ALLOWED.contains(&"ZZZZZ"));
    }
}
