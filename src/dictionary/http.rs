//! Remote dictionary over HTTP

use super::Dictionary;
use crate::config::LookupApi;
use crate::core::Word;
use crate::error::NetworkError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Title the entries API returns for unknown words
const NO_DEFINITIONS_TITLE: &str = "No Definitions Found";

#[derive(Debug, Deserialize)]
struct WordOfTheDayBody {
    word: String,
}

#[derive(Debug, Serialize)]
struct ValidateWordRequest<'a> {
    word: &'a str,
}

#[derive(Debug, Deserialize)]
struct ValidateWordBody {
    #[serde(alias = "validWord")]
    valid: bool,
}

/// Dictionary backed by a word-of-the-day service and a word lookup service
#[derive(Debug, Clone)]
pub struct HttpDictionary {
    client: reqwest::Client,
    word_of_the_day_url: String,
    lookup: LookupApi,
}

impl HttpDictionary {
    /// Create a client; every request is bounded by `timeout`
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::Transport` if the underlying client cannot be built.
    pub fn new(
        word_of_the_day_url: impl Into<String>,
        lookup: LookupApi,
        timeout: Duration,
    ) -> Result<Self, NetworkError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            word_of_the_day_url: word_of_the_day_url.into(),
            lookup,
        })
    }

    async fn lookup_entries(&self, base_url: &str, word: &str) -> Result<bool, NetworkError> {
        let url = format!("{}/{word}", base_url.trim_end_matches('/'));
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        classify_entries_response(status, &body)
    }

    async fn lookup_validate(&self, url: &str, word: &str) -> Result<bool, NetworkError> {
        let response = self
            .client
            .post(url)
            .json(&ValidateWordRequest { word })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        classify_validate_response(status, &body)
    }
}

#[async_trait::async_trait]
impl Dictionary for HttpDictionary {
    #[instrument(skip(self), fields(url = %self.word_of_the_day_url))]
    async fn word_of_the_day(&self) -> Result<Word, NetworkError> {
        let result = async {
            let response = self.client.get(&self.word_of_the_day_url).send().await?;
            let status = response.status();
            let body = response.text().await?;
            parse_word_of_the_day(status, &body)
        }
        .await;

        match &result {
            Ok(word) => debug!(length = word.len(), "Fetched word of the day"),
            Err(e) => warn!(error = %e, "Word of the day unavailable"),
        }
        result
    }

    #[instrument(skip(self))]
    async fn is_valid_word(&self, candidate: &str) -> Result<bool, NetworkError> {
        let word = candidate.to_ascii_lowercase();
        let result = match &self.lookup {
            LookupApi::Entries { base_url } => self.lookup_entries(base_url, &word).await,
            LookupApi::ValidateWord { url } => self.lookup_validate(url, &word).await,
        };

        match &result {
            Ok(valid) => debug!(valid, "Word lookup finished"),
            Err(e) => warn!(error = %e, "Word lookup failed"),
        }
        result
    }

    fn name(&self) -> &str {
        match self.lookup {
            LookupApi::Entries { .. } => "dictionaryapi",
            LookupApi::ValidateWord { .. } => "validate-word",
        }
    }
}

fn parse_word_of_the_day(status: StatusCode, body: &str) -> Result<Word, NetworkError> {
    if !status.is_success() {
        return Err(NetworkError::Status {
            status: status.as_u16(),
        });
    }

    let payload: WordOfTheDayBody =
        serde_json::from_str(body).map_err(|e| NetworkError::malformed(e.to_string()))?;

    Word::new(&payload.word)
        .map_err(|e| NetworkError::malformed(format!("unplayable word {:?}: {e}", payload.word)))
}

/// 404 and the "No Definitions Found" body are a clean "not a word"
fn classify_entries_response(status: StatusCode, body: &str) -> Result<bool, NetworkError> {
    if status == StatusCode::NOT_FOUND {
        return Ok(false);
    }
    if !status.is_success() {
        return Err(NetworkError::Status {
            status: status.as_u16(),
        });
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| NetworkError::malformed(e.to_string()))?;

    match value {
        serde_json::Value::Array(entries) => Ok(!entries.is_empty()),
        serde_json::Value::Object(map)
            if map.get("title").and_then(serde_json::Value::as_str)
                == Some(NO_DEFINITIONS_TITLE) =>
        {
            Ok(false)
        }
        other => Err(NetworkError::malformed(format!(
            "expected a list of entries, got {other}"
        ))),
    }
}

fn classify_validate_response(status: StatusCode, body: &str) -> Result<bool, NetworkError> {
    if !status.is_success() {
        return Err(NetworkError::Status {
            status: status.as_u16(),
        });
    }

    let payload: ValidateWordBody =
        serde_json::from_str(body).map_err(|e| NetworkError::malformed(e.to_string()))?;
    Ok(payload.valid)
}
