//! Round state machine
//!
//! One round owns a secret value, an attempt budget, and the distance of the
//! previous miss. Guess validation is the caller's job: [`Round::guess`] must
//! only be fed in-range integers, so malformed console input never costs an
//! attempt.

use super::DifficultyPreset;
use super::score::{self, RoundScore};
use rand::Rng;
use std::time::Instant;

/// Which side of the secret a miss fell on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TooHigh,
    TooLow,
}

/// Relative-distance hint emitted alongside a miss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    /// Closer than the previous miss
    Warmer,
    /// Farther than the previous miss
    Colder,
    /// Exactly as far as the previous miss
    Same,
    /// First miss landed within the preset's proximity threshold
    VeryClose,
}

/// Result of feeding one guess to [`Round::guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched the secret; the round is over
    Win(RoundScore),
    /// The guess missed; the round is over once `attempts_remaining` is zero
    Miss {
        direction: Direction,
        proximity: Option<Proximity>,
        attempts_remaining: u32,
    },
}

/// State for one round of the guessing game
///
/// Created per round and dropped when the round ends, win or lose.
pub struct Round {
    preset: DifficultyPreset,
    secret: i64,
    attempts_remaining: u32,
    attempts_used: u32,
    previous_distance: Option<i64>,
    started: Instant,
}

impl Round {
    /// Start a round with a secret drawn uniformly from the preset's range
    pub fn new(preset: &DifficultyPreset, rng: &mut impl Rng) -> Self {
        let secret = rng.random_range(preset.min..=preset.max);
        Self::with_secret(preset, secret)
    }

    /// Start a round with a known secret
    ///
    /// Useful for scripted rounds and tests.
    ///
    /// # Panics
    /// Panics if `secret` lies outside the preset's range.
    #[must_use]
    pub fn with_secret(preset: &DifficultyPreset, secret: i64) -> Self {
        assert!(
            preset.contains(secret),
            "secret must lie within the preset range"
        );
        Self {
            preset: *preset,
            secret,
            attempts_remaining: preset.attempt_limit,
            attempts_used: 0,
            previous_distance: None,
            started: Instant::now(),
        }
    }

    /// Feed one in-range guess to the round
    ///
    /// A hit ends the round with a [`RoundScore`]; a miss reports direction
    /// and a proximity hint and consumes one attempt.
    ///
    /// # Panics
    /// Panics if called after the attempt budget is spent.
    pub fn guess(&mut self, value: i64) -> GuessOutcome {
        assert!(self.attempts_remaining > 0, "round is already over");
        self.attempts_used += 1;

        if value == self.secret {
            let elapsed_secs = self.started.elapsed().as_secs();
            return GuessOutcome::Win(RoundScore {
                base: score::base_score(&self.preset, self.attempts_used),
                time_bonus: score::time_bonus(elapsed_secs),
                attempts_used: self.attempts_used,
                elapsed_secs,
            });
        }

        let direction = if value > self.secret {
            Direction::TooHigh
        } else {
            Direction::TooLow
        };

        let distance = (self.secret - value).abs();
        let proximity = match self.previous_distance {
            Some(previous) if distance < previous => Some(Proximity::Warmer),
            Some(previous) if distance > previous => Some(Proximity::Colder),
            Some(_) => Some(Proximity::Same),
            None if distance <= self.preset.proximity_threshold() => Some(Proximity::VeryClose),
            None => None,
        };

        self.previous_distance = Some(distance);
        self.attempts_remaining -= 1;

        GuessOutcome::Miss {
            direction,
            proximity,
            attempts_remaining: self.attempts_remaining,
        }
    }

    /// The preset this round was started with
    #[must_use]
    pub const fn preset(&self) -> &DifficultyPreset {
        &self.preset
    }

    /// The secret value, for end-of-round reveal
    #[must_use]
    pub const fn secret(&self) -> i64 {
        self.secret
    }

    /// Attempts still available
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Guesses consumed so far
    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Whether the attempt budget is spent
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.attempts_remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::difficulty::{self, EASY, MEDIUM, PRESETS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn secret_always_within_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for preset in &PRESETS {
            for _ in 0..1000 {
                let round = Round::new(preset, &mut rng);
                assert!(
                    preset.contains(round.secret()),
                    "{}: secret {} out of range",
                    preset.name,
                    round.secret()
                );
            }
        }
    }

    #[test]
    fn first_attempt_win_scores_full_base() {
        let mut round = Round::with_secret(&EASY, 7);
        match round.guess(7) {
            GuessOutcome::Win(score) => {
                assert_eq!(score.base, 80);
                assert_eq!(score.attempts_used, 1);
                assert!(score.total() >= score.base);
                assert!(score.total() > 0);
            }
            GuessOutcome::Miss { .. } => panic!("expected a win"),
        }
    }

    #[test]
    fn win_on_last_attempt_still_scores() {
        let mut round = Round::with_secret(&EASY, 5);
        for wrong in [1, 2, 3, 4, 6, 7, 8] {
            let outcome = round.guess(wrong);
            assert!(matches!(outcome, GuessOutcome::Miss { .. }));
        }
        assert_eq!(round.attempts_remaining(), 1);

        match round.guess(5) {
            GuessOutcome::Win(score) => {
                assert_eq!(score.attempts_used, 8);
                assert_eq!(score.base, 10);
                assert!(score.total() > 0);
            }
            GuessOutcome::Miss { .. } => panic!("expected a win"),
        }
    }

    #[test]
    fn exhausting_attempts_ends_the_round() {
        let mut round = Round::with_secret(&EASY, 1);
        for _ in 0..EASY.attempt_limit {
            assert!(!round.is_over());
            round.guess(2);
        }
        assert!(round.is_over());
        assert_eq!(round.attempts_remaining(), 0);
        assert_eq!(round.attempts_used(), EASY.attempt_limit);
    }

    #[test]
    fn miss_reports_direction() {
        let mut round = Round::with_secret(&MEDIUM, 50);
        match round.guess(70) {
            GuessOutcome::Miss { direction, .. } => assert_eq!(direction, Direction::TooHigh),
            GuessOutcome::Win(_) => panic!("expected a miss"),
        }
        match round.guess(30) {
            GuessOutcome::Miss { direction, .. } => assert_eq!(direction, Direction::TooLow),
            GuessOutcome::Win(_) => panic!("expected a miss"),
        }
    }

    #[test]
    fn second_miss_closer_is_warmer() {
        // secret 50: distance 20, then distance 10
        let mut round = Round::with_secret(&MEDIUM, 50);
        round.guess(30);
        match round.guess(40) {
            GuessOutcome::Miss { proximity, .. } => assert_eq!(proximity, Some(Proximity::Warmer)),
            GuessOutcome::Win(_) => panic!("expected a miss"),
        }
    }

    #[test]
    fn second_miss_farther_is_colder() {
        let mut round = Round::with_secret(&MEDIUM, 50);
        round.guess(40);
        match round.guess(20) {
            GuessOutcome::Miss { proximity, .. } => assert_eq!(proximity, Some(Proximity::Colder)),
            GuessOutcome::Win(_) => panic!("expected a miss"),
        }
    }

    #[test]
    fn equal_distance_is_same() {
        let mut round = Round::with_secret(&MEDIUM, 50);
        round.guess(40);
        match round.guess(60) {
            GuessOutcome::Miss { proximity, .. } => assert_eq!(proximity, Some(Proximity::Same)),
            GuessOutcome::Win(_) => panic!("expected a miss"),
        }
    }

    #[test]
    fn close_first_miss_hints_very_close() {
        // distance 5 <= threshold 9
        let mut round = Round::with_secret(&MEDIUM, 50);
        match round.guess(45) {
            GuessOutcome::Miss { proximity, .. } => {
                assert_eq!(proximity, Some(Proximity::VeryClose));
            }
            GuessOutcome::Win(_) => panic!("expected a miss"),
        }
    }

    #[test]
    fn distant_first_miss_has_no_hint() {
        // distance 40 > threshold 9
        let mut round = Round::with_secret(&MEDIUM, 50);
        match round.guess(90) {
            GuessOutcome::Miss { proximity, .. } => assert_eq!(proximity, None),
            GuessOutcome::Win(_) => panic!("expected a miss"),
        }
    }

    #[test]
    fn miss_decrements_attempts() {
        let mut round = Round::with_secret(&EASY, 10);
        match round.guess(3) {
            GuessOutcome::Miss {
                attempts_remaining, ..
            } => assert_eq!(attempts_remaining, EASY.attempt_limit - 1),
            GuessOutcome::Win(_) => panic!("expected a miss"),
        }
    }

    #[test]
    fn degenerate_range_is_deterministic() {
        let fixed = difficulty::DifficultyPreset {
            name: "Fixed",
            min: 5,
            max: 5,
            attempt_limit: 1,
            score_multiplier: 1,
        };
        let mut rng = StdRng::seed_from_u64(0);
        let mut round = Round::new(&fixed, &mut rng);
        assert_eq!(round.secret(), 5);
        assert!(matches!(round.guess(5), GuessOutcome::Win(_)));
    }

    #[test]
    #[should_panic(expected = "secret must lie within the preset range")]
    fn out_of_range_secret_is_rejected() {
        let _ = Round::with_secret(&EASY, 21);
    }
}
