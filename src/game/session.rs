//! Session controller
//!
//! Owns the target word and the grid, and routes every [`SessionEvent`]
//! through the input controller, the validator, and row progression. All
//! state changes happen inside [`Session::handle`]; the only concurrent work
//! is the sleeping debounce timer and dictionary lookups, which report back
//! through the event channel returned from [`Session::start`].

use super::event::{InputEvent, SessionEvent};
use super::input::InputController;
use super::progression::{Advance, Outcome, RowProgression};
use super::signal::{Signal, SignalSink};
use super::validator::{self, GuessValidator, GuessVerdict, Submission};
use crate::config::GameConfig;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::SessionInitError;
use crate::grid::{CellRef, Grid};
use std::fmt::Write as _;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct Session {
    target: Word,
    grid: Grid,
    input: InputController,
    validator: GuessValidator,
    dictionary: Arc<dyn Dictionary>,
    events: mpsc::UnboundedSender<SessionEvent>,
    signals: SignalSink,
    outcome: Option<Outcome>,
}

impl Session {
    /// Fetch the target word and lay out a fresh grid
    ///
    /// The returned receiver carries timer and lookup completions; feed
    /// everything it yields back into [`Session::handle`].
    ///
    /// # Errors
    ///
    /// Returns `SessionInitError` if the word of the day cannot be fetched.
    pub async fn start(
        dictionary: Arc<dyn Dictionary>,
        config: &GameConfig,
        signals: SignalSink,
    ) -> Result<(Self, mpsc::UnboundedReceiver<SessionEvent>), SessionInitError> {
        let target = dictionary.word_of_the_day().await?;
        let rows = config.max_guesses.max(1);
        info!(
            dictionary = dictionary.name(),
            width = target.len(),
            rows,
            "Session started"
        );

        let (events, rx) = mpsc::unbounded_channel();
        let mut session = Self {
            grid: Grid::new(rows, target.len()),
            input: InputController::new(config.delete_debounce, events.clone()),
            validator: GuessValidator::new(),
            target,
            dictionary,
            events,
            signals,
            outcome: None,
        };

        session.signals.emit(Signal::RowActivated { row: 0 });
        session.input.reclaim_focus(&session.grid, &session.signals);
        Ok((session, rx))
    }

    /// Process one event to completion
    pub fn handle(&mut self, event: impl Into<SessionEvent>) {
        let event = event.into();
        if self.outcome.is_some() {
            debug!(?event, "Session over; event ignored");
            return;
        }

        match event {
            SessionEvent::Input(input) => self.on_input(input),
            SessionEvent::TimerFired(ticket) => {
                self.input.on_timer(&mut self.grid, ticket, &self.signals);
            }
            SessionEvent::ValidationFinished { row, verdict } => {
                if self.validator.finish(row) {
                    self.apply_verdict(row, verdict);
                } else {
                    debug!(row, ?verdict, "Unexpected validation result ignored");
                }
            }
        }
    }

    /// Drain completions until no timer or lookup is outstanding
    pub async fn settle(&mut self, rx: &mut mpsc::UnboundedReceiver<SessionEvent>) {
        while self.is_busy() {
            let Some(event) = rx.recv().await else {
                break;
            };
            self.handle(event);
        }
    }

    fn on_input(&mut self, event: InputEvent) {
        if !matches!(event, InputEvent::FocusReclaim) {
            self.input.interrupt();
        }

        match event {
            InputEvent::Character { at, ch } => {
                if self.is_frozen(at.row) {
                    debug!(?at, "Row is being validated; character ignored");
                    return;
                }
                self.input.on_character(&mut self.grid, at, ch, &self.signals);
            }
            InputEvent::Delete { at } => {
                if self.is_frozen(at.row) {
                    debug!(?at, "Row is being validated; delete ignored");
                    return;
                }
                self.input.on_delete(&mut self.grid, at, &self.signals);
            }
            InputEvent::Submit { row } => self.submit(row),
            InputEvent::FocusReclaim => {
                self.input.reclaim_focus(&self.grid, &self.signals);
            }
        }
    }

    fn is_frozen(&self, row: usize) -> bool {
        self.validator.pending_row() == Some(row)
    }

    fn submit(&mut self, row: usize) {
        let Some(active) = self.grid.row(row).filter(|r| r.is_active()) else {
            debug!(row, "Submit for inactive row ignored");
            return;
        };

        match self.validator.begin(row, active) {
            Submission::AlreadyPending => {}
            Submission::Decided(verdict) => self.apply_verdict(row, verdict),
            Submission::Lookup { candidate } => {
                debug!(row, %candidate, "Validating guess");
                let dictionary = Arc::clone(&self.dictionary);
                let events = self.events.clone();
                tokio::spawn(async move {
                    let verdict = validator::lookup(dictionary.as_ref(), &candidate).await;
                    let _ = events.send(SessionEvent::ValidationFinished { row, verdict });
                });
            }
        }
    }

    fn apply_verdict(&mut self, row: usize, verdict: GuessVerdict) {
        match verdict {
            GuessVerdict::Accepted => self.advance(row),
            GuessVerdict::RejectedNetworkError => {
                self.signals.emit(Signal::LookupFailed { row });
            }
            GuessVerdict::RejectedIncomplete | GuessVerdict::RejectedInvalidWord => {
                debug!(row, ?verdict, "Guess rejected");
                self.signals.emit(Signal::RowShake { row, verdict });
            }
        }
    }

    fn advance(&mut self, row: usize) {
        self.input.interrupt();
        let Some(Advance {
            locked,
            feedback,
            next,
            outcome,
        }) = RowProgression::accept(&mut self.grid, row, &self.target)
        else {
            warn!(row, "Accepted row could not be locked");
            return;
        };

        self.signals.emit(Signal::RowLocked {
            row: locked,
            feedback,
        });

        if let Some(next) = next {
            self.signals.emit(Signal::RowActivated { row: next });
            self.input.reclaim_focus(&self.grid, &self.signals);
        }

        if let Some(outcome) = outcome {
            self.signals.emit(Signal::SessionEnded {
                outcome: outcome.clone(),
            });
            self.outcome = Some(outcome);
        }
    }

    /// True while a debounce timer or dictionary lookup is outstanding
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.input.is_busy() || self.validator.pending_row().is_some()
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn focus(&self) -> Option<CellRef> {
        self.input.focus()
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The target word, revealed only once the session has ended
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        self.outcome.as_ref().map(|_| &self.target)
    }

    #[must_use]
    pub fn dictionary_name(&self) -> &str {
        self.dictionary.name()
    }

    /// Spoiler-free emoji summary of a finished game
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let score = match self.outcome.as_ref()? {
            Outcome::Won { guesses } => guesses.to_string(),
            Outcome::Lost { .. } => "X".to_string(),
        };

        let mut text = format!("Wordle {score}/{}", self.grid.row_count());
        for feedback in self.grid.rows().iter().filter_map(|r| r.feedback()) {
            let _ = write!(text, "\n{}", feedback.to_emoji());
        }
        Some(text)
    }
}
