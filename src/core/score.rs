//! Round score computation
//!
//! A winning round earns a base component from the attempts left over plus a
//! small bonus for finishing quickly.

use super::DifficultyPreset;

/// Seconds within which finishing still earns a time bonus
pub const TIME_BONUS_WINDOW_SECS: u64 = 30;

/// Points per remaining attempt, before the difficulty multiplier
const POINTS_PER_ATTEMPT: u32 = 10;

/// Score breakdown for a winning round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundScore {
    /// Component from attempts remaining and the difficulty multiplier
    pub base: u32,
    /// Component from finishing inside the bonus window
    pub time_bonus: u32,
    /// Guesses consumed, including the winning one
    pub attempts_used: u32,
    /// Whole seconds from round start to the winning guess
    pub elapsed_secs: u64,
}

impl RoundScore {
    /// Combined round score
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.base + self.time_bonus
    }
}

/// Base score for a win after `attempts_used` guesses
///
/// `max(0, attempt_limit - attempts_used + 1) * score_multiplier * 10`.
#[must_use]
pub fn base_score(preset: &DifficultyPreset, attempts_used: u32) -> u32 {
    let attempts_left = (preset.attempt_limit + 1).saturating_sub(attempts_used);
    attempts_left * preset.score_multiplier * POINTS_PER_ATTEMPT
}

/// Time bonus for a win after `elapsed_secs` whole seconds
///
/// One point per unused second of the bonus window, zero once the window has
/// passed. Elapsed time is truncated to whole seconds before it gets here.
#[must_use]
pub fn time_bonus(elapsed_secs: u64) -> u32 {
    TIME_BONUS_WINDOW_SECS.saturating_sub(elapsed_secs) as u32
}
