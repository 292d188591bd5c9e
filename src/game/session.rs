//! Interactive game session
//!
//! Runs rounds against line-oriented console I/O until the player declines
//! another, keeping a running total and recording qualifying high scores. The
//! random source and the store are injected so scripted sessions stay
//! deterministic.

use crate::core::{DifficultyPreset, GuessOutcome, Round, difficulty};
use crate::output::formatters::{direction_message, proximity_message, score_breakdown};
use crate::store::{HighScoreRecord, HighScoreStore};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Totals reported when the player ends the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: u32,
    pub total_score: u32,
}

/// Interactive session driving repeated rounds
pub struct Session<'a, R: Rng> {
    rng: R,
    store: &'a HighScoreStore,
}

impl<'a, R: Rng> Session<'a, R> {
    /// Create a session with an injected random source and high-score store
    pub fn new(rng: R, store: &'a HighScoreStore) -> Self {
        Self { rng, store }
    }

    /// Run rounds until the player declines another
    ///
    /// # Errors
    /// Returns an error only when console I/O itself fails (including EOF on
    /// input); bad input is re-prompted and never ends the session.
    pub fn run(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> io::Result<SessionSummary> {
        writeln!(out, "\n{}", "═".repeat(60).cyan())?;
        writeln!(out, " {} ", "NUMBER QUEST".bright_cyan().bold())?;
        writeln!(out, "{}", "═".repeat(60).cyan())?;

        match self.store.load() {
            Some(record) => writeln!(
                out,
                "Current high score: {} by {}",
                record.score, record.name
            )?,
            None => writeln!(out, "No high score yet. Set the first one!")?,
        }

        let mut summary = SessionSummary {
            rounds_played: 0,
            total_score: 0,
        };

        loop {
            let preset = prompt_difficulty(input, out)?;
            let round = Round::new(preset, &mut self.rng);
            let round_score = drive_round(round, input, out)?;

            summary.rounds_played += 1;
            summary.total_score += round_score;

            if round_score > 0 {
                self.maybe_record_high_score(round_score, input, out)?;
            }

            writeln!(
                out,
                "Total score after {} rounds: {}",
                summary.rounds_played, summary.total_score
            )?;

            if !prompt_yes(input, out, "Play again? (y/n)")? {
                break;
            }
        }

        writeln!(
            out,
            "\nThanks for playing! Rounds: {}, Total score: {}",
            summary.rounds_played, summary.total_score
        )?;

        Ok(summary)
    }

    /// Persist `score` if it strictly beats the stored record
    ///
    /// A save failure is reported as a warning and the session continues.
    fn maybe_record_high_score(
        &self,
        score: u32,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let current = self.store.load();
        if !beats_high_score(score, current.as_ref()) {
            return Ok(());
        }

        let name = prompt_line(input, out, "New high score! Enter your name")?;
        let record = HighScoreRecord::new(name, score);

        match self.store.save(&record) {
            Ok(()) => writeln!(out, "Saved high score: {} {}", record.name, record.score)?,
            Err(err) => writeln!(
                out,
                "{} {err}",
                "Warning: could not save high score:".yellow()
            )?,
        }
        Ok(())
    }
}

/// Whether `score` qualifies as a new high score
///
/// Zero never qualifies; otherwise the stored score must be strictly beaten.
#[must_use]
pub fn beats_high_score(score: u32, current: Option<&HighScoreRecord>) -> bool {
    score > 0 && current.is_none_or(|record| score > record.score)
}

/// Play a prepared round to completion over console I/O
///
/// Returns the round score: the winning total, or zero when the attempt
/// budget runs out.
///
/// # Errors
/// Returns an error if console I/O fails.
pub fn drive_round(
    mut round: Round,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<u32> {
    let preset = *round.preset();
    writeln!(
        out,
        "\nI've picked a number between {} and {}. You have {} attempts.",
        preset.min, preset.max, preset.attempt_limit
    )?;

    loop {
        let guess = prompt_guess(input, out, &preset)?;

        match round.guess(guess) {
            GuessOutcome::Win(score) => {
                writeln!(
                    out,
                    "{} The number was {}. Attempts used: {}. Time: {}s",
                    "Correct!".bright_green().bold(),
                    round.secret(),
                    score.attempts_used,
                    score.elapsed_secs
                )?;
                writeln!(out, "Round score: {}\n", score_breakdown(&score))?;
                return Ok(score.total());
            }
            GuessOutcome::Miss {
                direction,
                proximity,
                attempts_remaining,
            } => {
                writeln!(out, "{}", direction_message(direction))?;
                if let Some(proximity) = proximity {
                    writeln!(out, "{}", proximity_message(proximity))?;
                }

                if attempts_remaining == 0 {
                    writeln!(
                        out,
                        "{} The number was {}.\n",
                        "Out of attempts.".red(),
                        round.secret()
                    )?;
                    return Ok(0);
                }
                writeln!(out, "Attempts left: {attempts_remaining}\n")?;
            }
        }
    }
}

/// Prompt until a valid difficulty token is entered
fn prompt_difficulty(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<&'static DifficultyPreset> {
    writeln!(out, "\nChoose difficulty:")?;
    for (index, preset) in difficulty::PRESETS.iter().enumerate() {
        writeln!(
            out,
            "{}) {:<6} ({}-{}, {} attempts, x{})",
            index + 1,
            preset.name,
            preset.min,
            preset.max,
            preset.attempt_limit,
            preset.score_multiplier
        )?;
    }

    loop {
        let token = prompt_line(input, out, "Enter 1/2/3")?;
        match DifficultyPreset::from_selector(&token) {
            Some(preset) => return Ok(preset),
            None => writeln!(out, "Invalid choice. Try again.")?,
        }
    }
}

/// Prompt until an in-range integer guess is entered
///
/// Rejected input never consumes an attempt; only the returned value does.
fn prompt_guess(
    input: &mut impl BufRead,
    out: &mut impl Write,
    preset: &DifficultyPreset,
) -> io::Result<i64> {
    loop {
        let prompt = format!("Enter your guess ({}-{})", preset.min, preset.max);
        let token = prompt_line(input, out, &prompt)?;

        match token.parse::<i64>() {
            Ok(value) if preset.contains(value) => return Ok(value),
            Ok(_) => writeln!(
                out,
                "Please enter a number between {} and {}.",
                preset.min, preset.max
            )?,
            Err(_) => writeln!(out, "Please enter a valid integer.")?,
        }
    }
}

/// Ask a yes/no question; only "y"/"yes" (case-insensitive) is affirmative
fn prompt_yes(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<bool> {
    let answer = prompt_line(input, out, prompt)?.to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}

/// Print a prompt and read one trimmed line
fn prompt_line(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<String> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}
