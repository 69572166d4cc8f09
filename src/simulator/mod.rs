//! Monte Carlo runner for comparing purchase policies.
//!
//! Plays many independent matches with the fixed four-policy roster and
//! aggregates which policy wins most often.

mod config;
mod report;
mod runner;

pub use config::{
    SimConfig, ENV_BALANCE, ENV_BOARD_SIZE, ENV_LOG_LEVEL, ENV_MAX_ROUNDS, ENV_NUM_RUNS, ENV_SEED,
};
pub use report::{PolicyWinRate, SimReport};
pub use runner::{create_roster, run_simulation, run_single_match};
