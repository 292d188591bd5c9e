//! Core domain types
//!
//! Difficulty presets, the round state machine, and score computation.

pub mod difficulty;
pub mod round;
pub mod score;

pub use difficulty::DifficultyPreset;
pub use round::{Direction, GuessOutcome, Proximity, Round};
pub use score::RoundScore;
