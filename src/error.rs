//! Error types for the dictionary client and session start-up
//!
//! Guess rejections (incomplete row, unknown word) are not errors; they are
//! reported as [`GuessVerdict`](crate::game::GuessVerdict) values.

use derive_more::{Display, Error, From};

/// A dictionary request could not be answered
///
/// Surfaced to the player as "try again"; never interpreted as "not a word".
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NetworkError {
    /// The request never produced a response (connect failure, timeout, TLS, ...)
    #[display("request failed: {message}")]
    Transport { message: String },

    /// The server answered with a status that carries no usable result
    #[display("unexpected response status {status}")]
    Status { status: u16 },

    /// The response body could not be interpreted
    #[display("malformed response: {message}")]
    Malformed { message: String },
}

impl NetworkError {
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::malformed(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else {
            Self::transport(err.to_string())
        }
    }
}

/// The session could not start because no target word is available
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
#[display("could not start a session: {source}")]
pub struct SessionInitError {
    pub source: NetworkError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn network_error_messages() {
        assert_eq!(
            NetworkError::Status { status: 503 }.to_string(),
            "unexpected response status 503"
        );
        assert_eq!(
            NetworkError::transport("connection refused").to_string(),
            "request failed: connection refused"
        );
    }

    #[test]
    fn session_init_error_keeps_source() {
        let err = SessionInitError::from(NetworkError::malformed("missing field `word`"));
        assert!(err.to_string().contains("missing field `word`"));
        assert!(err.source().is_some());
    }
}
