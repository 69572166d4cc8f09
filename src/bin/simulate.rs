//! Estate Sim CLI.
//!
//! Runs the configured number of matches and prints which purchase policy
//! wins most often. Environment variables set the defaults and flags
//! override them.
//!
//! Examples:
//!   estate-sim                      # 300 runs, settings from the environment
//!   estate-sim -n 1000 --seed 42    # reproducible 1000-run simulation
//!   estate-sim --json               # also save a JSON report

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{warn, Level};

use estate_sim::logging;
use estate_sim::simulator::{run_simulation, SimConfig, SimReport};

#[derive(Parser)]
#[command(name = "estate-sim")]
#[command(about = "Compare property purchase policies over many simulated matches", version)]
struct Cli {
    /// Number of matches to simulate
    #[arg(short = 'n', long)]
    runs: Option<u32>,

    /// Starting balance of every player
    #[arg(short, long)]
    balance: Option<f64>,

    /// Number of properties on the board
    #[arg(long)]
    board_size: Option<usize>,

    /// Round cap per match
    #[arg(short = 'r', long)]
    max_rounds: Option<u32>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Save the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(&self, config: &mut SimConfig) {
        if let Some(runs) = self.runs {
            config.num_runs = runs;
        }
        if let Some(balance) = self.balance {
            config.starting_balance = balance;
        }
        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(max_rounds) = self.max_rounds {
            config.max_rounds = max_rounds;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.verbose {
            config.log_level = Level::DEBUG.to_string();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SimConfig::from_env().context("failed to read configuration")?;
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;

    logging::init(logging::parse_level(&config.log_level)?);
    warn!("Application started");

    print_config(&config);

    let outcomes = run_simulation(&config).context("simulation aborted")?;
    let report = SimReport::from_outcomes(&outcomes);

    println!("{}", report.to_text());

    if cli.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())
            .with_context(|| format!("failed to write {}", filename))?;
        println!(
            "JSON report saved to: {} ({} runs)",
            filename,
            report.runs.len()
        );
    }

    Ok(())
}

fn print_config(config: &SimConfig) {
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              ESTATE POLICY SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:             {}", config.num_runs);
    println!("  Starting Balance: {:.2}", config.starting_balance);
    println!("  Board Size:       {}", config.board_size);
    println!("  Round Cap:        {}", config.max_rounds);
    if let Some(seed) = config.seed {
        println!("  Seed:             {}", seed);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_sim::simulator::{ENV_LOG_LEVEL, ENV_NUM_RUNS};

    fn env_config(pairs: &[(&str, &str)]) -> SimConfig {
        SimConfig::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap()
    }

    #[test]
    fn test_flags_override_invalid_environment() {
        let mut config = env_config(&[(ENV_NUM_RUNS, "0"), (ENV_LOG_LEVEL, "chatty")]);
        let cli = Cli::try_parse_from(["estate-sim", "-n", "10", "-v"]).unwrap();
        cli.apply(&mut config);

        assert_eq!(config.num_runs, 10);
        assert!(config.validate().is_ok());
        assert_eq!(
            logging::parse_level(&config.log_level).unwrap(),
            Level::DEBUG
        );
    }

    #[test]
    fn test_invalid_environment_without_override_is_rejected() {
        let mut config = env_config(&[(ENV_NUM_RUNS, "0")]);
        let cli = Cli::try_parse_from(["estate-sim", "--seed", "3"]).unwrap();
        cli.apply(&mut config);

        assert_eq!(config.seed, Some(3));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_flags_override_environment_values() {
        let mut config = env_config(&[(ENV_NUM_RUNS, "50")]);
        let cli = Cli::try_parse_from([
            "estate-sim",
            "--runs",
            "7",
            "--balance",
            "450",
            "--board-size",
            "12",
            "--max-rounds",
            "90",
        ])
        .unwrap();
        cli.apply(&mut config);

        assert_eq!(config.num_runs, 7);
        assert_eq!(config.starting_balance, 450.0);
        assert_eq!(config.board_size, 12);
        assert_eq!(config.max_rounds, 90);
        assert_eq!(config.seed, None);
    }
}
