//! Per-match outcome record consumed by the report.

use crate::player::{Player, PlayerId, PurchasePolicy};
use serde::Serialize;

/// Final state of one player when the match ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStanding {
    pub id: PlayerId,
    pub policy: PurchasePolicy,
    pub balance: f64,
    pub laps: u32,
    pub eliminated: bool,
}

impl PlayerStanding {
    pub fn from_player(player: &Player, eliminated: bool) -> Self {
        Self {
            id: player.id,
            policy: player.policy,
            balance: player.balance,
            laps: player.laps,
            eliminated,
        }
    }
}

/// Summary of one completed match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    /// Rounds played when the match terminated
    pub rounds: u32,
    /// Round cap reached with more than one player still active
    pub timeout: bool,
    pub winner: PlayerId,
    pub winner_policy: PurchasePolicy,
    /// Every player of the match, sorted by id
    pub standings: Vec<PlayerStanding>,
}

impl MatchOutcome {
    /// Timeout as a 0/1 counter for aggregation
    pub fn timeout_flag(&self) -> u32 {
        u32::from(self.timeout)
    }

    pub fn won_by(&self, policy: PurchasePolicy) -> bool {
        self.winner_policy == policy
    }

    /// One slot per policy in [`PurchasePolicy::ALL`] order; only the winner's is 1.
    pub fn policy_wins(&self) -> [u32; PurchasePolicy::COUNT] {
        let mut wins = [0; PurchasePolicy::COUNT];
        wins[self.winner_policy.index()] = 1;
        wins
    }
}
