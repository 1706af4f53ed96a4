//! Guess validation pipeline
//!
//! A submitted row is judged in a fixed order: it must be complete, then the
//! dictionary must recognise it. The completeness check is local and never
//! costs a lookup.

use crate::dictionary::Dictionary;
use crate::grid::Row;
use tracing::{debug, warn};

/// Result of validating one submitted row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessVerdict {
    Accepted,
    /// At least one cell is empty
    RejectedIncomplete,
    /// The dictionary does not know the word
    RejectedInvalidWord,
    /// The dictionary could not be reached or answered nonsense
    RejectedNetworkError,
}

impl GuessVerdict {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Rejections the player caused get the shake; network trouble does not
    #[must_use]
    pub const fn shakes_row(self) -> bool {
        matches!(self, Self::RejectedIncomplete | Self::RejectedInvalidWord)
    }

    /// Short status line for front-ends
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::RejectedIncomplete => "Not enough letters",
            Self::RejectedInvalidWord => "Not in word list",
            Self::RejectedNetworkError => "Could not reach the dictionary, try again",
        }
    }
}

/// What to do with a submission after the local checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Ask the dictionary about `candidate` (lowercase)
    Lookup { candidate: String },
    /// Settled without a lookup
    Decided(GuessVerdict),
    /// A lookup for this row is already running; drop the submission
    AlreadyPending,
}

/// Tracks the one validation that may be in flight
#[derive(Debug, Default)]
pub struct GuessValidator {
    in_flight: Option<usize>,
}

impl GuessValidator {
    #[must_use]
    pub const fn new() -> Self {
        Self { in_flight: None }
    }

    /// Run the local stages for `row_index` and claim the in-flight slot if
    /// a lookup is needed
    pub fn begin(&mut self, row_index: usize, row: &Row) -> Submission {
        if let Some(pending) = self.in_flight {
            debug!(row = row_index, pending, "Submission while validating; ignored");
            return Submission::AlreadyPending;
        }

        match local_stage(row) {
            Some(verdict) => Submission::Decided(verdict),
            None => {
                self.in_flight = Some(row_index);
                Submission::Lookup {
                    candidate: row.letters().to_ascii_lowercase(),
                }
            }
        }
    }

    /// Release the slot; false if `row` was not the one in flight
    pub fn finish(&mut self, row: usize) -> bool {
        if self.in_flight == Some(row) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn pending_row(&self) -> Option<usize> {
        self.in_flight
    }
}

fn local_stage(row: &Row) -> Option<GuessVerdict> {
    (!row.is_complete()).then_some(GuessVerdict::RejectedIncomplete)
}

/// Dictionary stage: map the lookup result onto a verdict
pub async fn lookup(dictionary: &dyn Dictionary, candidate: &str) -> GuessVerdict {
    match dictionary.is_valid_word(candidate).await {
        Ok(true) => GuessVerdict::Accepted,
        Ok(false) => GuessVerdict::RejectedInvalidWord,
        Err(e) => {
            warn!(candidate, dictionary = dictionary.name(), error = %e, "Lookup failed");
            GuessVerdict::RejectedNetworkError
        }
    }
}

/// Run the whole pipeline for one row without any in-flight bookkeeping
pub async fn validate(row: &Row, dictionary: &dyn Dictionary) -> GuessVerdict {
    match local_stage(row) {
        Some(verdict) => verdict,
        None => lookup(dictionary, &row.letters().to_ascii_lowercase()).await,
    }
}
