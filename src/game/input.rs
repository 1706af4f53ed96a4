//! Keystroke handling for the active row
//!
//! Applies character and deletion events to cells, advances focus, and owns
//! the debounce that turns "delete on an empty cell" into "step back and
//! clear the previous cell".

use super::SessionEvent;
use super::signal::{Signal, SignalSink};
use super::timer::{CancellableTimer, Ticket};
use crate::grid::{CellRef, CellWrite, Grid};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// Deferred navigation armed by a deletion on an empty cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StepBack {
    from: CellRef,
}

#[derive(Debug)]
pub struct InputController {
    focus: Option<CellRef>,
    debounce: Duration,
    step_back: CancellableTimer<StepBack>,
}

impl InputController {
    /// `wake` receives the debounce timer's completions
    #[must_use]
    pub fn new(debounce: Duration, wake: mpsc::UnboundedSender<SessionEvent>) -> Self {
        Self {
            focus: None,
            debounce,
            step_back: CancellableTimer::new(wake),
        }
    }

    /// The cell that currently has input focus
    #[must_use]
    pub const fn focus(&self) -> Option<CellRef> {
        self.focus
    }

    /// True while a deferred step-back is waiting to run
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.step_back.is_armed()
    }

    /// A newer keystroke supersedes any pending step-back
    pub fn interrupt(&mut self) {
        if let Some(StepBack { from }) = self.step_back.cancel() {
            debug!(?from, "Cancelled pending step-back");
        }
    }

    /// Store a letter and move to the next cell, or clear on a non-letter
    pub fn on_character(&mut self, grid: &mut Grid, at: CellRef, ch: char, signals: &SignalSink) {
        let Some(row) = grid.active_row_mut(at.row) else {
            debug!(?at, "Character for inactive row ignored");
            return;
        };
        let width = row.width();
        let Some(cell) = row.cell_mut(at.cell) else {
            debug!(?at, "Character for missing cell ignored");
            return;
        };

        match cell.write(ch) {
            CellWrite::Filled(letter) => {
                signals.emit(Signal::CellFilled { at, letter });
                let next = if at.cell + 1 < width {
                    CellRef::new(at.row, at.cell + 1)
                } else {
                    at
                };
                self.move_focus(next, signals);
            }
            CellWrite::Rejected => {
                debug!(?at, ?ch, "Non-letter cleared cell");
                self.move_focus(at, signals);
            }
            CellWrite::Disabled => {}
        }
    }

    /// Clear a filled cell, or arm the step-back for an empty one
    pub fn on_delete(&mut self, grid: &mut Grid, at: CellRef, signals: &SignalSink) {
        let Some(cell) = grid
            .active_row_mut(at.row)
            .and_then(|row| row.cell_mut(at.cell))
        else {
            debug!(?at, "Delete for inactive cell ignored");
            return;
        };

        if !cell.is_empty() {
            cell.clear();
            self.move_focus(at, signals);
        } else if at.cell > 0 {
            self.step_back.arm(self.debounce, StepBack { from: at });
        }
    }

    /// Run the step-back for `ticket` if it is still current
    pub fn on_timer(&mut self, grid: &mut Grid, ticket: Ticket, signals: &SignalSink) {
        let Some(StepBack { from }) = self.step_back.fire(ticket) else {
            debug!(?ticket, "Stale timer ignored");
            return;
        };
        let Some(row) = grid.active_row_mut(from.row) else {
            debug!(?from, "Row no longer active; step-back dropped");
            return;
        };

        let previous = CellRef::new(from.row, from.cell - 1);
        if let Some(cell) = row.cell_mut(previous.cell) {
            cell.clear();
        }
        self.move_focus(previous, signals);
    }

    /// Apply the focus-placement rule and always announce the result
    pub fn reclaim_focus(&mut self, grid: &Grid, signals: &SignalSink) -> Option<CellRef> {
        self.focus = grid.focus_target();
        if let Some(at) = self.focus {
            signals.emit(Signal::FocusMoved { at });
        }
        self.focus
    }

    fn move_focus(&mut self, at: CellRef, signals: &SignalSink) {
        if self.focus != Some(at) {
            self.focus = Some(at);
            signals.emit(Signal::FocusMoved { at });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        grid: Grid,
        input: InputController,
        wake: mpsc::UnboundedReceiver<SessionEvent>,
        signals: SignalSink,
        signal_rx: mpsc::UnboundedReceiver<Signal>,
    }

    impl Harness {
        fn new(width: usize) -> Self {
            let (tx, wake) = mpsc::unbounded_channel();
            let (signals, signal_rx) = SignalSink::channel();
            let mut input = InputController::new(Duration::from_millis(40), tx);
            let grid = Grid::new(2, width);
            input.reclaim_focus(&grid, &signals);
            Self {
                grid,
                input,
                wake,
                signals,
                signal_rx,
            }
        }

        fn type_str(&mut self, text: &str) {
            for ch in text.chars() {
                let at = self.input.focus().unwrap();
                self.input.on_character(&mut self.grid, at, ch, &self.signals);
            }
        }

        fn delete(&mut self) {
            let at = self.input.focus().unwrap();
            self.input.interrupt();
            self.input.on_delete(&mut self.grid, at, &self.signals);
        }

        async fn run_timer(&mut self) {
            let Some(SessionEvent::TimerFired(ticket)) = self.wake.recv().await else {
                panic!("expected timer event");
            };
            self.input.on_timer(&mut self.grid, ticket, &self.signals);
        }

        fn letters(&self, row: usize) -> String {
            self.grid.row(row).unwrap().letters()
        }

        fn drain(&mut self) -> Vec<Signal> {
            std::iter::from_fn(|| self.signal_rx.try_recv().ok()).collect()
        }
    }

    #[tokio::test]
    async fn typing_fills_and_advances() {
        let mut h = Harness::new(5);
        h.drain();

        h.type_str("cr");
        assert_eq!(h.letters(0), "CR");
        assert_eq!(h.input.focus(), Some(CellRef::new(0, 2)));

        let signals = h.drain();
        assert_eq!(
            signals[0],
            Signal::CellFilled {
                at: CellRef::new(0, 0),
                letter: 'C'
            }
        );
        assert_eq!(
            signals[1],
            Signal::FocusMoved {
                at: CellRef::new(0, 1)
            }
        );
    }

    #[tokio::test]
    async fn focus_stays_on_last_cell() {
        let mut h = Harness::new(3);
        h.type_str("abcd");
        assert_eq!(h.letters(0), "ABD");
        assert_eq!(h.input.focus(), Some(CellRef::new(0, 2)));
    }

    #[tokio::test]
    async fn non_letters_leave_cell_empty() {
        let mut h = Harness::new(5);
        h.type_str("7");
        h.type_str("#");
        assert_eq!(h.letters(0), "");
        assert_eq!(h.input.focus(), Some(CellRef::new(0, 0)));

        h.type_str("a");
        let at = CellRef::new(0, 0);
        h.input.on_character(&mut h.grid, at, '1', &h.signals);
        assert!(h.grid.row(0).unwrap().cell(0).unwrap().is_empty());
    }

    #[tokio::test]
    async fn pending_row_rejects_input() {
        let mut h = Harness::new(5);
        h.input
            .on_character(&mut h.grid, CellRef::new(1, 0), 'a', &h.signals);
        h.input.on_delete(&mut h.grid, CellRef::new(1, 0), &h.signals);
        assert_eq!(h.letters(1), "");
        assert!(!h.input.is_busy());
    }

    #[tokio::test]
    async fn delete_on_filled_cell_clears_in_place() {
        let mut h = Harness::new(5);
        h.type_str("abc");
        let at = CellRef::new(0, 1);
        h.input.on_delete(&mut h.grid, at, &h.signals);

        assert_eq!(h.letters(0), "AC");
        assert_eq!(h.input.focus(), Some(at));
        assert!(!h.input.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn delete_on_empty_cell_steps_back_after_debounce() {
        let mut h = Harness::new(5);
        h.type_str("ab");
        h.delete();

        assert!(h.input.is_busy());
        assert_eq!(h.letters(0), "AB", "nothing changes before the debounce");

        h.run_timer().await;
        assert_eq!(h.letters(0), "A");
        assert_eq!(h.input.focus(), Some(CellRef::new(0, 1)));
        assert!(!h.input.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn keystroke_cancels_pending_step_back() {
        let mut h = Harness::new(5);
        h.type_str("ab");
        h.delete();

        h.input.interrupt();
        h.type_str("c");
        assert!(!h.input.is_busy());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(h.wake.try_recv().is_err());
        assert_eq!(h.letters(0), "ABC");
    }

    #[tokio::test]
    async fn delete_on_first_empty_cell_does_nothing() {
        let mut h = Harness::new(5);
        h.delete();
        assert!(!h.input.is_busy());
        assert_eq!(h.input.focus(), Some(CellRef::new(0, 0)));
    }

    #[tokio::test]
    async fn reclaim_focus_uses_placement_rule() {
        let mut h = Harness::new(3);
        h.type_str("abc");
        h.drain();

        assert_eq!(
            h.input.reclaim_focus(&h.grid, &h.signals),
            Some(CellRef::new(0, 2))
        );
        assert_eq!(
            h.drain(),
            vec![Signal::FocusMoved {
                at: CellRef::new(0, 2)
            }]
        );

        h.input.on_delete(&mut h.grid, CellRef::new(0, 0), &h.signals);
        assert_eq!(
            h.input.reclaim_focus(&h.grid, &h.signals),
            Some(CellRef::new(0, 0))
        );
    }
}
