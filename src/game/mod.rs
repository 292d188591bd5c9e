//! Game orchestration
//!
//! The interactive session loop and the automated guessers used by the
//! simulate command.

pub mod bot;
pub mod session;

pub use bot::{BinarySearchGuesser, Guesser, GuesserKind, RandomGuesser};
pub use session::{Session, SessionSummary, beats_high_score, drive_round};
