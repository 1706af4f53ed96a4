//! Game configuration
//!
//! Built by the CLI from flags and `WORDLE_*` environment variables; the
//! library only ever sees the resolved values.

use std::path::PathBuf;
use std::time::Duration;

/// Default word-of-the-day endpoint
pub const DEFAULT_WORD_OF_THE_DAY_URL: &str = "https://words.dev-apis.com/word-of-the-day";

/// Default dictionary-entries endpoint (GET `{base}/{word}`)
pub const DEFAULT_ENTRIES_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Default validate-word endpoint (POST `{"word": ...}`)
pub const DEFAULT_VALIDATE_URL: &str = "https://words.dev-apis.com/word/validate-word";

/// Standard number of guesses
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// How validity of a candidate word is looked up remotely
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupApi {
    /// Dictionary entries lookup; a 404 means "not a word"
    Entries { base_url: String },
    /// Validation endpoint answering `{"valid": bool}`
    ValidateWord { url: String },
}

impl Default for LookupApi {
    fn default() -> Self {
        Self::Entries {
            base_url: DEFAULT_ENTRIES_URL.to_string(),
        }
    }
}

/// Where the target word and the validity answers come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Remote {
        word_of_the_day_url: String,
        lookup: LookupApi,
    },
    /// Local word lists; `random` picks any answer instead of today's
    Offline {
        random: bool,
        /// Replaces the compiled-in lists (used for both answers and guesses)
        word_list: Option<PathBuf>,
    },
}

impl Default for DictionarySource {
    fn default() -> Self {
        Self::Remote {
            word_of_the_day_url: DEFAULT_WORD_OF_THE_DAY_URL.to_string(),
            lookup: LookupApi::default(),
        }
    }
}

/// Resolved settings for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of rows in the grid
    pub max_guesses: usize,
    /// Delay before a deletion on an empty cell steps back to the previous cell
    pub delete_debounce: Duration,
    /// Upper bound on any single dictionary request
    pub request_timeout: Duration,
    pub source: DictionarySource,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            delete_debounce: Duration::from_millis(40),
            request_timeout: Duration::from_secs(10),
            source: DictionarySource::default(),
        }
    }
}

impl GameConfig {
    /// Check the settings describe a playable game
    ///
    /// # Errors
    ///
    /// Returns a message if the grid would have no rows or requests could
    /// never complete.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_guesses == 0 {
            return Err("max guesses must be at least 1".to_string());
        }
        if self.request_timeout.is_zero() {
            return Err("request timeout must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert!(config.validate().is_ok());
        assert!(matches!(
            config.source,
            DictionarySource::Remote {
                lookup: LookupApi::Entries { .. },
                ..
            }
        ));
    }

    #[test]
    fn zero_guesses_rejected() {
        let config = GameConfig {
            max_guesses: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = GameConfig {
            request_timeout: Duration::ZERO,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
