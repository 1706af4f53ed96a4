//! One-way notifications for the presentation layer

use super::{GuessVerdict, Outcome};
use crate::core::Feedback;
use crate::grid::CellRef;
use tokio::sync::mpsc;
use tracing::trace;

/// Something the presentation layer may want to animate or display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    CellFilled { at: CellRef, letter: char },
    FocusMoved { at: CellRef },
    /// The row was rejected for a reason the player can fix
    RowShake { row: usize, verdict: GuessVerdict },
    /// The dictionary could not be reached; the row stays editable
    LookupFailed { row: usize },
    RowLocked { row: usize, feedback: Feedback },
    RowActivated { row: usize },
    SessionEnded { outcome: Outcome },
}

/// Non-blocking sender for [`Signal`]s
///
/// Emitting never waits, and a dropped receiver is not an error.
#[derive(Debug, Clone, Default)]
pub struct SignalSink {
    tx: Option<mpsc::UnboundedSender<Signal>>,
}

impl SignalSink {
    /// A sink paired with the receiver the presentation layer drains
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Signal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// A sink that discards everything
    #[must_use]
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn emit(&self, signal: Signal) {
        trace!(?signal, "Signal");
        if let Some(tx) = &self.tx {
            let _ = tx.send(signal);
        }
    }
}
