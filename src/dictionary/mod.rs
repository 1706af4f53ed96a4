//! Dictionary client
//!
//! Two lookups back the game: today's target word and whether a candidate
//! guess is a real word. Both are single-attempt; retrying is the caller's call.

mod embedded;
#[cfg(test)]
pub(crate) mod fake;
mod http;

pub use embedded::EmbeddedDictionary;
pub use http::HttpDictionary;

use crate::config::{DictionarySource, GameConfig};
use crate::core::Word;
use crate::error::NetworkError;
use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Source of target words and word validity
#[async_trait::async_trait]
pub trait Dictionary: Send + Sync {
    /// Fetch the target word for a new session
    ///
    /// Any failure is fatal to session start.
    async fn word_of_the_day(&self) -> Result<Word, NetworkError>;

    /// Look up whether `candidate` is a real word
    ///
    /// A definitive "not found" is `Ok(false)`; `Err` means validity could
    /// not be confirmed either way.
    async fn is_valid_word(&self, candidate: &str) -> Result<bool, NetworkError>;

    /// Short description for logs and status lines
    fn name(&self) -> &str;
}

/// Build the dictionary described by `config`
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed or a custom
/// offline word list cannot be read.
pub fn from_config(config: &GameConfig) -> Result<Arc<dyn Dictionary>> {
    match &config.source {
        DictionarySource::Remote {
            word_of_the_day_url,
            lookup,
        } => {
            let client =
                HttpDictionary::new(word_of_the_day_url, lookup.clone(), config.request_timeout)
                    .context("failed to build HTTP dictionary client")?;
            Ok(Arc::new(client))
        }
        DictionarySource::Offline { random, word_list } => {
            let dictionary = match word_list {
                Some(path) => {
                    let words = load_from_file(path)
                        .with_context(|| format!("failed to read word list {}", path.display()))?;
                    EmbeddedDictionary::from_words(words.clone(), words, *random)
                }
                None => EmbeddedDictionary::builtin(*random),
            };
            Ok(Arc::new(dictionary))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_config_builds_embedded_dictionary() {
        let config = GameConfig {
            source: DictionarySource::Offline {
                random: false,
                word_list: None,
            },
            ..GameConfig::default()
        };
        let dictionary = from_config(&config).unwrap();

        assert_eq!(dictionary.name(), "offline");
        assert!(dictionary.is_valid_word("crane").await.unwrap());
    }

    #[test]
    fn remote_config_builds_http_dictionary() {
        let dictionary = from_config(&GameConfig::default()).unwrap();
        assert_eq!(dictionary.name(), "dictionaryapi");
    }

    #[test]
    fn missing_word_list_is_an_error() {
        let config = GameConfig {
            source: DictionarySource::Offline {
                random: true,
                word_list: Some("/no/such/list.txt".into()),
            },
            ..GameConfig::default()
        };
        assert!(from_config(&config).is_err());
    }
}
