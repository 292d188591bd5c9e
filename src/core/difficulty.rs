//! Difficulty presets
//!
//! A preset fixes the secret's value range, the attempt budget, and the score
//! multiplier for one difficulty tier.

use std::fmt;

/// A named difficulty configuration
///
/// Immutable after construction. The three playable presets are the [`EASY`],
/// [`MEDIUM`], and [`HARD`] constants; [`PRESETS`] lists them in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPreset {
    /// Display name of the tier
    pub name: &'static str,
    /// Inclusive lower bound of the secret range
    pub min: i64,
    /// Inclusive upper bound of the secret range
    pub max: i64,
    /// Guesses available per round
    pub attempt_limit: u32,
    /// Scales the base score
    pub score_multiplier: u32,
}

/// Easy: 1-20, 8 attempts, x1
pub const EASY: DifficultyPreset = DifficultyPreset {
    name: "Easy",
    min: 1,
    max: 20,
    attempt_limit: 8,
    score_multiplier: 1,
};

/// Medium: 1-100, 7 attempts, x2
pub const MEDIUM: DifficultyPreset = DifficultyPreset {
    name: "Medium",
    min: 1,
    max: 100,
    attempt_limit: 7,
    score_multiplier: 2,
};

/// Hard: 1-1000, 10 attempts, x3
pub const HARD: DifficultyPreset = DifficultyPreset {
    name: "Hard",
    min: 1,
    max: 1000,
    attempt_limit: 10,
    score_multiplier: 3,
};

/// All playable presets, in menu order
pub const PRESETS: [DifficultyPreset; 3] = [EASY, MEDIUM, HARD];

impl DifficultyPreset {
    /// Look up a preset from a selection token
    ///
    /// Accepts the menu digit ("1"/"2"/"3") or the preset name,
    /// case-insensitively. Returns `None` for anything else so the caller can
    /// re-prompt.
    #[must_use]
    pub fn from_selector(token: &str) -> Option<&'static DifficultyPreset> {
        match token.trim().to_lowercase().as_str() {
            "1" | "easy" => Some(&EASY),
            "2" | "medium" => Some(&MEDIUM),
            "3" | "hard" => Some(&HARD),
            _ => None,
        }
    }

    /// Check whether a value lies within the secret range
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Distance at or below which a first miss counts as "very close"
    ///
    /// A tenth of the range span (integer division), never less than 1.
    #[must_use]
    pub const fn proximity_threshold(&self) -> i64 {
        let tenth = (self.max - self.min) / 10;
        if tenth < 1 { 1 } else { tenth }
    }
}

impl fmt::Display for DifficultyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
