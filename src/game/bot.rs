//! Automated guessers
//!
//! Strategies that play rounds without a console. The simulate command uses
//! them to measure scoring and attempt counts across many rounds.

use crate::core::{DifficultyPreset, Direction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A strategy for picking the next guess from directional feedback
pub trait Guesser {
    /// Pick the next guess
    fn next_guess(&mut self) -> i64;

    /// Record the direction feedback for a missed guess
    fn observe(&mut self, guess: i64, direction: Direction);
}

/// Halves the remaining window on every miss
///
/// Finds any secret in `ceil(log2(span + 1))` guesses, which fits inside the
/// attempt budget of every built-in preset.
pub struct BinarySearchGuesser {
    low: i64,
    high: i64,
}

impl BinarySearchGuesser {
    /// Start with the preset's full range as the window
    #[must_use]
    pub const fn new(preset: &DifficultyPreset) -> Self {
        Self {
            low: preset.min,
            high: preset.max,
        }
    }
}

impl Guesser for BinarySearchGuesser {
    fn next_guess(&mut self) -> i64 {
        self.low + (self.high - self.low) / 2
    }

    fn observe(&mut self, guess: i64, direction: Direction) {
        match direction {
            Direction::TooHigh => self.high = guess - 1,
            Direction::TooLow => self.low = guess + 1,
        }
    }
}

/// Draws uniformly from the window the feedback has not ruled out
pub struct RandomGuesser {
    low: i64,
    high: i64,
    rng: StdRng,
}

impl RandomGuesser {
    /// Start with the preset's full range and a seeded random source
    #[must_use]
    pub fn new(preset: &DifficultyPreset, seed: u64) -> Self {
        Self {
            low: preset.min,
            high: preset.max,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Guesser for RandomGuesser {
    fn next_guess(&mut self) -> i64 {
        self.rng.random_range(self.low..=self.high)
    }

    fn observe(&mut self, guess: i64, direction: Direction) {
        match direction {
            Direction::TooHigh => self.high = (guess - 1).max(self.low),
            Direction::TooLow => self.low = (guess + 1).min(self.high),
        }
    }
}

/// Guesser selection for the simulate command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuesserKind {
    BinarySearch,
    Random,
}

impl GuesserKind {
    /// Create a kind from a name string
    ///
    /// Supported names: "binary", "bisect", "random". Defaults to binary
    /// search if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random,
            _ => Self::BinarySearch,
        }
    }

    /// Instantiate the guesser for one round
    #[must_use]
    pub fn build(self, preset: &DifficultyPreset, seed: u64) -> Box<dyn Guesser> {
        match self {
            Self::BinarySearch => Box::new(BinarySearchGuesser::new(preset)),
            Self::Random => Box::new(RandomGuesser::new(preset, seed)),
        }
    }
}
