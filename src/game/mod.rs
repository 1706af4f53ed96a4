//! Game state machine
//!
//! Input handling, guess validation, row progression, and the session that
//! ties them together. Front-ends translate raw key presses into
//! [`InputEvent`]s, feed them to a [`Session`], and render the [`Signal`]s
//! it emits.

mod event;
mod input;
mod progression;
mod session;
mod signal;
mod timer;
mod validator;

pub use event::{InputEvent, SessionEvent};
pub use input::InputController;
pub use progression::{Advance, Outcome, RowProgression};
pub use session::Session;
pub use signal::{Signal, SignalSink};
pub use timer::{CancellableTimer, Ticket};
pub use validator::{GuessValidator, GuessVerdict, Submission, lookup, validate};
