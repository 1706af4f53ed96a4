//! Command implementations

pub mod check;
pub mod score;
pub mod simple;

pub use check::{CheckResult, check_word};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
