//! Core domain types for the game
//!
//! Pure value types with no I/O: the target word and the feedback it produces.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use word::{Word, WordError};
