//! Offline dictionary over local word lists

use super::Dictionary;
use crate::core::Word;
use crate::error::NetworkError;
use crate::wordlists::{ALLOWED, ANSWERS, loader::words_from_slice};
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Dictionary that never touches the network
///
/// The word of the day rotates through the answer list by calendar day
/// (UTC), or is drawn at random when `random` is set.
#[derive(Debug, Clone)]
pub struct EmbeddedDictionary {
    answers: Vec<Word>,
    allowed: FxHashSet<String>,
    random: bool,
}

impl EmbeddedDictionary {
    /// Use the word lists compiled into the binary
    #[must_use]
    pub fn builtin(random: bool) -> Self {
        Self::from_words(words_from_slice(ANSWERS), words_from_slice(ALLOWED), random)
    }

    /// Use custom lists; answers are always accepted as guesses
    #[must_use]
    pub fn from_words(
        answers: Vec<Word>,
        allowed: impl IntoIterator<Item = Word>,
        random: bool,
    ) -> Self {
        let allowed = allowed
            .into_iter()
            .chain(answers.iter().cloned())
            .map(|w| w.text().to_string())
            .collect();

        Self {
            answers,
            allowed,
            random,
        }
    }

    /// Answer for the given day number since the Unix epoch
    fn answer_for_day(&self, day: u64) -> Option<&Word> {
        if self.answers.is_empty() {
            return None;
        }
        let index = (day % self.answers.len() as u64) as usize;
        self.answers.get(index)
    }

    fn today() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs() / SECONDS_PER_DAY)
    }
}

#[async_trait::async_trait]
impl Dictionary for EmbeddedDictionary {
    async fn word_of_the_day(&self) -> Result<Word, NetworkError> {
        let word = if self.random {
            self.answers.choose(&mut rand::rng())
        } else {
            self.answer_for_day(Self::today())
        };

        word.cloned()
            .ok_or_else(|| NetworkError::malformed("offline word list is empty"))
    }

    async fn is_valid_word(&self, candidate: &str) -> Result<bool, NetworkError> {
        let valid = self.allowed.contains(&candidate.to_ascii_uppercase());
        debug!(candidate, valid, "Offline lookup");
        Ok(valid)
    }

    fn name(&self) -> &str {
        "offline"
    }
}
