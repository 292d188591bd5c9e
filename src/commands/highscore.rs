//! Highscore command
//!
//! Shows or clears the persisted high score without starting a game.

use crate::store::HighScoreStore;
use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::Path;

/// Show the stored high score, or delete it when `clear` is set
///
/// # Errors
///
/// Returns an error if clearing fails for any reason other than the file
/// already being absent. Showing never errors; a missing or malformed store
/// reads as "no high score".
pub fn run_highscore(highscore_path: &Path, clear: bool) -> Result<()> {
    let store = HighScoreStore::new(highscore_path);

    if clear {
        match fs::remove_file(store.path()) {
            Ok(()) => println!("High score cleared."),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                println!("No high score to clear.");
            }
            Err(err) => return Err(err.into()),
        }
        return Ok(());
    }

    match store.load() {
        Some(record) => println!(
            "{} {} by {}",
            "High score:".bright_cyan().bold(),
            record.score.to_string().bright_yellow().bold(),
            record.name
        ),
        None => println!("No high score yet. Set the first one!"),
    }
    Ok(())
}
