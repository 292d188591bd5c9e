//! Number Quest
//!
//! A console number-guessing game with difficulty tiers, warmer/colder hints,
//! round scoring with a time bonus, and a persisted high score.
//!
//! # Quick Start
//!
//! ```rust
//! use number_quest::core::{GuessOutcome, Round, difficulty};
//!
//! // Script a round with a known secret
//! let mut round = Round::with_secret(&difficulty::EASY, 7);
//!
//! match round.guess(7) {
//!     GuessOutcome::Win(score) => assert!(score.total() > 0),
//!     GuessOutcome::Miss { .. } => unreachable!(),
//! }
//! ```

// Core domain types
pub mod core;

// Game orchestration
pub mod game;

// High-score persistence
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
