//! Command implementations

pub mod highscore;
pub mod play;
pub mod simulate;

pub use highscore::run_highscore;
pub use play::run_play;
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
