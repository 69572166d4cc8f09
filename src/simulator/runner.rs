//! Runs many independent matches and collects their outcomes.
//!
//! Every match gets a fresh board, a fresh roster and its own RNG. With a
//! seed configured, run `i` uses `seed + i`, so a whole simulation can be
//! replayed exactly.

use super::config::SimConfig;
use crate::core::error::Result;
use crate::game::{Match, MatchOutcome};
use crate::player::{Player, PlayerId, PurchasePolicy};
use crate::property::generate_board;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

/// One player per policy, in [`PurchasePolicy::ALL`] order with ids starting at 1.
pub fn create_roster(starting_balance: f64) -> Vec<Player> {
    PurchasePolicy::ALL
        .iter()
        .enumerate()
        .map(|(i, &policy)| Player::new(PlayerId(i as u32 + 1), policy, starting_balance))
        .collect()
}

/// Play every configured run and return the outcomes in run order.
pub fn run_simulation(config: &SimConfig) -> Result<Vec<MatchOutcome>> {
    config.validate()?;

    let mut outcomes = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let outcome = run_single_match(config, run_idx, &mut rng)?;
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Build a fresh board and roster and play one match to completion.
pub fn run_single_match(
    config: &SimConfig,
    run_idx: u32,
    rng: &mut impl Rng,
) -> Result<MatchOutcome> {
    warn!(run = run_idx, "*** Started the Game ***");

    let properties = generate_board(config.board_size, rng);
    let players = create_roster(config.starting_balance);
    let mut game = Match::new(players, properties, config.max_rounds)?;

    let outcome = game.play(rng)?;
    log_summary(run_idx, &outcome);
    Ok(outcome)
}

fn log_summary(run_idx: u32, outcome: &MatchOutcome) {
    warn!(
        run = run_idx,
        rounds = outcome.rounds,
        timeout = outcome.timeout,
        "==== Result of Game ===="
    );
    for s in &outcome.standings {
        warn!(
            "Player(id={}, laps={:4}, balance={:+10.2}, policy={}, eliminated={})",
            s.id, s.laps, s.balance, s.policy, s.eliminated
        );
    }
}
