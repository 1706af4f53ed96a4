//! Wordle Game
//!
//! The input state machine behind a Wordle-style word game: a grid of
//! single-letter cells, a validation pipeline backed by a dictionary service,
//! and row-by-row progression with duplicate-aware feedback scoring.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wordle_game::config::GameConfig;
//! use wordle_game::dictionary::EmbeddedDictionary;
//! use wordle_game::game::{InputEvent, Session, SignalSink};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let dictionary = Arc::new(EmbeddedDictionary::builtin(true));
//! let (mut session, mut events) =
//!     Session::start(dictionary, &GameConfig::default(), SignalSink::disconnected()).await?;
//!
//! for ch in "crane".chars() {
//!     let at = session.focus().ok_or("no active row")?;
//!     session.handle(InputEvent::Character { at, ch });
//! }
//! session.handle(InputEvent::Submit { row: 0 });
//! session.settle(&mut events).await;
//! # Ok(())
//! # }
//! ```

// Core domain types
pub mod core;

// Cell/row model
pub mod grid;

// Dictionary client
pub mod dictionary;

// Input, validation, progression, session
pub mod game;

// Word lists
pub mod wordlists;

pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
