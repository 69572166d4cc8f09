//! Simulation configuration.

use crate::core::constants::{
    DEFAULT_BALANCE, DEFAULT_BOARD_SIZE, DEFAULT_LOG_LEVEL, DEFAULT_MAX_ROUNDS, DEFAULT_NUM_RUNS,
};
use crate::core::error::{Result, SimError};
use crate::logging::parse_level;
use serde::Serialize;
use std::str::FromStr;

pub const ENV_NUM_RUNS: &str = "NUMBER_OF_RUNS";
pub const ENV_BALANCE: &str = "DEFAULT_BALANCE";
pub const ENV_BOARD_SIZE: &str = "QUANTITY_ESTATES";
pub const ENV_MAX_ROUNDS: &str = "MAX_ROUNDS";
pub const ENV_SEED: &str = "SIM_SEED";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimConfig {
    /// Number of matches to play
    pub num_runs: u32,

    /// Balance every player starts a match with
    pub starting_balance: f64,

    /// Number of properties on the board
    pub board_size: usize,

    /// Round cap after which a match ends as a timeout
    pub max_rounds: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log threshold name, e.g. "ERROR" or "debug"
    pub log_level: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: DEFAULT_NUM_RUNS,
            starting_balance: DEFAULT_BALANCE,
            board_size: DEFAULT_BOARD_SIZE,
            max_rounds: DEFAULT_MAX_ROUNDS,
            seed: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl SimConfig {
    /// Defaults overridden by the process environment.
    ///
    /// Only parse errors are reported here; call [`SimConfig::validate`] once
    /// any command-line overrides have been applied.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            num_runs: parse_var(&lookup, ENV_NUM_RUNS)?.unwrap_or(defaults.num_runs),
            starting_balance: parse_var(&lookup, ENV_BALANCE)?
                .unwrap_or(defaults.starting_balance),
            board_size: parse_var(&lookup, ENV_BOARD_SIZE)?.unwrap_or(defaults.board_size),
            max_rounds: parse_var(&lookup, ENV_MAX_ROUNDS)?.unwrap_or(defaults.max_rounds),
            seed: parse_var(&lookup, ENV_SEED)?,
            log_level: lookup(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
        };
        Ok(config)
    }

    /// Quick config for tests and smoke runs
    pub fn quick(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_runs == 0 {
            return Err(SimError::InvalidConfig(
                "number of runs must be at least 1".to_string(),
            ));
        }
        if self.board_size == 0 {
            return Err(SimError::InvalidConfig(
                "board needs at least one property".to_string(),
            ));
        }
        if self.max_rounds == 0 {
            return Err(SimError::InvalidConfig(
                "round cap must be at least 1".to_string(),
            ));
        }
        if !self.starting_balance.is_finite() || self.starting_balance < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "starting balance must be a non-negative number, got {}",
                self.starting_balance
            )));
        }
        parse_level(&self.log_level)?;
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SimError::InvalidConfig(format!("{}={:?} is not valid", key, raw))),
    }
}
