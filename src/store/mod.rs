//! High-score persistence
//!
//! A single `"<name> <score>"` record in a flat text file. Reads fail soft: a
//! missing, empty, or malformed file is the same as no record. Writes replace
//! the whole file, never append.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default location of the high-score file, relative to the working directory
pub const DEFAULT_HIGHSCORE_PATH: &str = "highscore.txt";

/// Fallback name used when the player submits a blank one
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// A persisted name-and-score pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreRecord {
    pub name: String,
    pub score: u32,
}

impl HighScoreRecord {
    /// Create a record, substituting [`DEFAULT_PLAYER_NAME`] for a blank name
    #[must_use]
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        let name = name.into().trim().to_string();
        let name = if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name
        };
        Self { name, score }
    }
}

/// File-backed store holding at most one [`HighScoreRecord`]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored record
    ///
    /// Returns `None` when the file is absent, unreadable, or does not parse;
    /// a corrupt store is indistinguishable from an empty one.
    #[must_use]
    pub fn load(&self) -> Option<HighScoreRecord> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| parse_record(&content))
    }

    /// Replace the stored record with `record`
    ///
    /// # Errors
    /// Returns any I/O error from writing the file; the caller decides whether
    /// that is fatal.
    pub fn save(&self, record: &HighScoreRecord) -> io::Result<()> {
        fs::write(&self.path, format!("{} {}", record.name, record.score))
    }
}

/// Parse `"<name> <score>"`; anything else is `None`
///
/// Content is whitespace-trimmed and must split into exactly two tokens, the
/// second a non-negative integer.
fn parse_record(content: &str) -> Option<HighScoreRecord> {
    let mut tokens = content.split_whitespace();
    let name = tokens.next()?;
    let score = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(HighScoreRecord {
        name: name.to_string(),
        score,
    })
}
