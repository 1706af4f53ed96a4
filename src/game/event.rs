//! Inbound events driving a session

use super::GuessVerdict;
use super::timer::Ticket;
use crate::grid::CellRef;

/// The four input kinds a capture layer translates raw platform input into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A character was typed into the cell at `at`
    Character { at: CellRef, ch: char },
    /// Deletion was pressed while `at` had focus
    Delete { at: CellRef },
    /// The accept key was pressed while a cell of `row` had focus
    Submit { row: usize },
    /// The play area regained focus or was clicked
    FocusReclaim,
}

/// Everything a session reacts to, in arrival order
///
/// Input comes from the front-end; the other variants are completions of
/// work the session itself started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Input(InputEvent),
    /// A deletion debounce timer elapsed
    TimerFired(Ticket),
    /// A dictionary lookup for `row` completed
    ValidationFinished { row: usize, verdict: GuessVerdict },
}

impl From<InputEvent> for SessionEvent {
    fn from(event: InputEvent) -> Self {
        Self::Input(event)
    }
}
