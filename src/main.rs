//! Number Quest - CLI
//!
//! Console number-guessing game: pick a difficulty, beat the attempt budget,
//! and chase the persisted high score.

use anyhow::Result;
use clap::{Parser, Subcommand};
use number_quest::commands::{SimulationConfig, run_highscore, run_play, run_simulation};
use number_quest::core::DifficultyPreset;
use number_quest::game::GuesserKind;
use number_quest::output::print_simulation_result;
use number_quest::store::DEFAULT_HIGHSCORE_PATH;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "number_quest",
    about = "Number guessing game with difficulty tiers, warmer/colder hints, and a persisted high score",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path of the high-score file
    #[arg(long, global = true, default_value = DEFAULT_HIGHSCORE_PATH)]
    highscore_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively (default)
    Play {
        /// Seed the random source for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play many automated rounds and report scoring statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Difficulty: easy, medium (default), or hard
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Guesser: binary (default) or random
        #[arg(short, long, default_value = "binary")]
        guesser: String,

        /// Base seed for reproducible runs
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },

    /// Show or clear the persisted high score
    Highscore {
        /// Delete the stored record instead of showing it
        #[arg(long)]
        clear: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to interactive play if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => run_play(&cli.highscore_file, seed),
        Commands::Simulate {
            rounds,
            difficulty,
            guesser,
            seed,
        } => {
            let preset = DifficultyPreset::from_selector(&difficulty)
                .ok_or_else(|| anyhow::anyhow!("unknown difficulty: {difficulty}"))?;

            let config = SimulationConfig {
                rounds,
                preset: *preset,
                guesser: GuesserKind::from_name(&guesser),
                seed,
            };

            let result = run_simulation(&config);
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Highscore { clear } => run_highscore(&cli.highscore_file, clear),
    }
}
