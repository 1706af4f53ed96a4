//! Scriptable dictionary for tests

use super::Dictionary;
use crate::core::Word;
use crate::error::NetworkError;
use rustc_hash::FxHashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory dictionary that counts lookups and can be told to fail
#[derive(Debug)]
pub(crate) struct FakeDictionary {
    target: Option<Word>,
    words: FxHashSet<String>,
    delay: Duration,
    timeout: Option<Duration>,
    fail_lookups: AtomicBool,
    lookups: AtomicUsize,
}

impl FakeDictionary {
    /// `target` is the word of the day; it and `words` are valid guesses
    pub(crate) fn new(target: &str, words: &[&str]) -> Self {
        let target = Word::new(target).unwrap();
        let mut known: FxHashSet<String> = words.iter().map(|w| w.to_ascii_uppercase()).collect();
        known.insert(target.text().to_string());

        Self {
            target: Some(target),
            words: known,
            delay: Duration::ZERO,
            timeout: None,
            fail_lookups: AtomicBool::new(false),
            lookups: AtomicUsize::new(0),
        }
    }

    /// A dictionary whose word-of-the-day request always fails
    pub(crate) fn unavailable() -> Self {
        Self {
            target: None,
            ..Self::new("x", &[])
        }
    }

    /// Every lookup waits this long before answering
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Lookups slower than `timeout` give up with a transport error, like a client timeout
    pub(crate) fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn set_fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    /// Number of validity lookups issued so far
    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

/// Base URL of a local server that accepts connections and never answers
pub(crate) async fn silent_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            open.push(stream);
        }
    });
    format!("http://{addr}")
}

#[async_trait::async_trait]
impl Dictionary for FakeDictionary {
    async fn word_of_the_day(&self) -> Result<Word, NetworkError> {
        self.target
            .clone()
            .ok_or(NetworkError::Status { status: 503 })
    }

    async fn is_valid_word(&self, candidate: &str) -> Result<bool, NetworkError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(limit) = self.timeout.filter(|limit| *limit < self.delay) {
            tokio::time::sleep(limit).await;
            return Err(NetworkError::transport("operation timed out"));
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(NetworkError::transport("connection reset"));
        }
        Ok(self.words.contains(&candidate.to_ascii_uppercase()))
    }

    fn name(&self) -> &str {
        "fake"
    }
}
