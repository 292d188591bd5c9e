//! Simulate command
//!
//! Plays many automated rounds of one difficulty and aggregates the results:
//! what a player with a given guessing strategy would score, round after
//! round.

use crate::core::{DifficultyPreset, GuessOutcome, Round};
use crate::game::GuesserKind;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    /// Number of rounds to play
    pub rounds: usize,
    /// Difficulty to play every round at
    pub preset: DifficultyPreset,
    /// Strategy used to pick guesses
    pub guesser: GuesserKind,
    /// Base seed; round `i` derives its RNG from `seed + i`
    pub seed: u64,
}

/// Aggregated results of a simulation run
pub struct SimulationResult {
    pub rounds: usize,
    pub wins: usize,
    pub win_rate: f64,
    pub total_score: u64,
    pub average_score: f64,
    pub average_attempts: f64,
    /// Attempts used per round, won rounds only
    pub attempt_distribution: FxHashMap<u32, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Outcome of one automated round
struct RoundReport {
    attempts: u32,
    score: u32,
    won: bool,
}

/// Play `config.rounds` automated rounds and aggregate the results
///
/// Rounds are independent, so they run in parallel; each derives its RNG from
/// the base seed and its index, making runs reproducible.
///
/// # Panics
///
/// Panics if the progress-bar template fails to parse, which is a programming
/// error in the literal below.
#[must_use]
pub fn run_simulation(config: &SimulationConfig) -> SimulationResult {
    let start = Instant::now();

    let progress = ProgressBar::new(config.rounds as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let reports: Vec<RoundReport> = (0..config.rounds)
        .into_par_iter()
        .map(|index| {
            let report = play_automated(
                &config.preset,
                config.guesser,
                config.seed.wrapping_add(index as u64),
            );
            progress.inc(1);
            report
        })
        .collect();
    progress.finish_and_clear();

    aggregate(&reports, start.elapsed())
}

/// Play one round with a per-round seeded RNG and a fresh guesser
fn play_automated(preset: &DifficultyPreset, kind: GuesserKind, seed: u64) -> RoundReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut round = Round::new(preset, &mut rng);
    // Decorrelate the guesser's randomness from the secret draw
    let mut guesser = kind.build(preset, seed ^ 0x9e37_79b9_7f4a_7c15);

    loop {
        let value = guesser.next_guess();
        match round.guess(value) {
            GuessOutcome::Win(score) => {
                return RoundReport {
                    attempts: score.attempts_used,
                    score: score.total(),
                    won: true,
                };
            }
            GuessOutcome::Miss {
                direction,
                attempts_remaining,
                ..
            } => {
                guesser.observe(value, direction);
                if attempts_remaining == 0 {
                    return RoundReport {
                        attempts: round.attempts_used(),
                        score: 0,
                        won: false,
                    };
                }
            }
        }
    }
}

fn aggregate(reports: &[RoundReport], duration: Duration) -> SimulationResult {
    let rounds = reports.len();
    let wins = reports.iter().filter(|r| r.won).count();
    let total_score: u64 = reports.iter().map(|r| u64::from(r.score)).sum();
    let total_attempts: u64 = reports.iter().map(|r| u64::from(r.attempts)).sum();

    let mut attempt_distribution: FxHashMap<u32, usize> = FxHashMap::default();
    for report in reports.iter().filter(|r| r.won) {
        *attempt_distribution.entry(report.attempts).or_insert(0) += 1;
    }

    let divisor = if rounds == 0 { 1.0 } else { rounds as f64 };
    SimulationResult {
        rounds,
        wins,
        win_rate: wins as f64 / divisor,
        total_score,
        average_score: total_score as f64 / divisor,
        average_attempts: total_attempts as f64 / divisor,
        attempt_distribution,
        duration,
        rounds_per_second: rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::difficulty::{EASY, HARD, MEDIUM, PRESETS};

    fn config(preset: DifficultyPreset, guesser: GuesserKind, seed: u64) -> SimulationConfig {
        SimulationConfig {
            rounds: 50,
            preset,
            guesser,
            seed,
        }
    }

    #[test]
    fn binary_search_wins_every_round() {
        for preset in PRESETS {
            let result = run_simulation(&config(preset, GuesserKind::BinarySearch, 0));
            assert_eq!(result.rounds, 50);
            assert_eq!(result.wins, 50, "{}", preset.name);
            assert!((result.win_rate - 1.0).abs() < f64::EPSILON);
            assert!(result.total_score > 0);
        }
    }

    #[test]
    fn distribution_counts_won_rounds() {
        let result = run_simulation(&config(MEDIUM, GuesserKind::BinarySearch, 0));
        let counted: usize = result.attempt_distribution.values().sum();
        assert_eq!(counted, result.wins);
        for &attempts in result.attempt_distribution.keys() {
            assert!((1..=MEDIUM.attempt_limit).contains(&attempts));
        }
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        let first = run_simulation(&config(HARD, GuesserKind::Random, 42));
        let second = run_simulation(&config(HARD, GuesserKind::Random, 42));

        assert_eq!(first.wins, second.wins);
        assert_eq!(first.total_score, second.total_score);
        assert_eq!(first.attempt_distribution, second.attempt_distribution);
    }

    #[test]
    fn average_attempts_within_budget() {
        let result = run_simulation(&config(EASY, GuesserKind::BinarySearch, 7));
        assert!(result.average_attempts >= 1.0);
        assert!(result.average_attempts <= f64::from(EASY.attempt_limit));
    }

    #[test]
    fn zero_rounds_yield_zeroes_not_nan() {
        let result = run_simulation(&SimulationConfig {
            rounds: 0,
            preset: EASY,
            guesser: GuesserKind::BinarySearch,
            seed: 0,
        });
        assert_eq!(result.rounds, 0);
        assert_eq!(result.wins, 0);
        assert!(result.win_rate.abs() < f64::EPSILON);
        assert!(result.average_score.abs() < f64::EPSILON);
    }
}
