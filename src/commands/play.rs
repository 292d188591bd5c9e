//! Play command
//!
//! Wires the interactive session to stdin/stdout and the on-disk high-score
//! store.

use crate::game::Session;
use crate::store::HighScoreStore;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::Path;

/// Run the interactive game against the console
///
/// A fixed `seed` replays the same sequence of secrets, mainly useful for
/// demos and debugging; otherwise the OS supplies the entropy.
///
/// # Errors
///
/// Returns an error if console I/O fails. Bad input is handled by
/// re-prompting and never errors.
pub fn run_play(highscore_path: &Path, seed: Option<u64>) -> Result<()> {
    let store = HighScoreStore::new(highscore_path);
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let mut session = Session::new(rng, &store);
    session.run(&mut input, &mut out)?;
    Ok(())
}
