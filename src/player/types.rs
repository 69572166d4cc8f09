//! Player identity and mutable match state.

use super::policy::PurchasePolicy;
use crate::core::constants::LAP_BONUS;
use serde::Serialize;
use std::fmt;

/// Identifier of a player, unique within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A simulated player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub policy: PurchasePolicy,
    pub balance: f64,
    /// Board index, always in `[0, board_size)`
    pub position: usize,
    /// Completed laps around the board
    pub laps: u32,
}

impl Player {
    pub fn new(id: PlayerId, policy: PurchasePolicy, balance: f64) -> Self {
        Self {
            id,
            policy,
            balance,
            position: 0,
            laps: 0,
        }
    }

    /// Advance `spaces` along a board of `board_size` spaces.
    ///
    /// A lap is counted when the un-wrapped target `position + spaces` reaches
    /// `board_size`, which can happen on the very first move. Each lap credits
    /// [`LAP_BONUS`]. Returns true if a lap was completed.
    pub fn move_spaces(&mut self, spaces: usize, board_size: usize) -> bool {
        let target = self.position + spaces;
        self.position = target % board_size;

        let lap_completed = target >= board_size;
        if lap_completed {
            self.complete_lap();
        }
        lap_completed
    }

    fn complete_lap(&mut self) {
        self.laps += 1;
        self.balance += LAP_BONUS;
    }

    pub fn is_balance_negative(&self) -> bool {
        self.balance < 0.0
    }

    /// Can this player cover `amount` without going negative
    pub fn can_afford(&self, amount: f64) -> bool {
        self.balance >= amount
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player(id={}, laps={:4}, balance={:+10.2}, policy={})",
            self.id,
            self.laps,
            self.balance,
            self.policy.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{DEFAULT_BALANCE, DEFAULT_BOARD_SIZE};

    fn player() -> Player {
        Player::new(PlayerId(1), PurchasePolicy::Random, DEFAULT_BALANCE)
    }

    #[test]
    fn test_new_player_defaults() {
        let p = player();
        assert_eq!(p.id, PlayerId(1));
        assert_eq!(p.policy, PurchasePolicy::Random);
        assert_eq!(p.balance, 300.0);
        assert_eq!(p.position, 0);
        assert_eq!(p.laps, 0);
    }

    #[test]
    fn test_move_spaces_without_lap() {
        let mut p = player();
        assert!(!p.move_spaces(4, DEFAULT_BOARD_SIZE));
        assert_eq!(p.position, 4);
        assert_eq!(p.laps, 0);
        assert_eq!(p.balance, 300.0);
    }

    #[test]
    fn test_move_spaces_all_rolls_from_every_position() {
        for start in 0..DEFAULT_BOARD_SIZE {
            for spaces in 1..=6 {
                let mut p = player();
                p.position = start;
                let lapped = p.move_spaces(spaces, DEFAULT_BOARD_SIZE);

                assert_eq!(p.position, (start + spaces) % DEFAULT_BOARD_SIZE);
                assert_eq!(lapped, start + spaces >= DEFAULT_BOARD_SIZE);
                let expected_laps = u32::from(lapped);
                assert_eq!(p.laps, expected_laps);
                assert_eq!(p.balance, 300.0 + LAP_BONUS * expected_laps as f64);
            }
        }
    }

    #[test]
    fn test_move_landing_exactly_on_start_completes_lap() {
        let mut p = player();
        p.position = 19;
        assert!(p.move_spaces(1, DEFAULT_BOARD_SIZE));
        assert_eq!(p.position, 0);
        assert_eq!(p.laps, 1);
        assert_eq!(p.balance, 400.0);
    }

    #[test]
    fn test_first_move_reaching_board_size_counts_as_lap() {
        // Un-wrapped sum is compared, so a roll equal to the board size laps
        let mut p = player();
        assert!(p.move_spaces(20, DEFAULT_BOARD_SIZE));
        assert_eq!(p.position, 0);
        assert_eq!(p.laps, 1);
    }

    #[test]
    fn test_small_board_lap() {
        let mut p = player();
        p.position = 2;
        assert!(p.move_spaces(5, 4));
        assert_eq!(p.position, 3);
        // One lap per move, even if the sum wraps twice
        assert_eq!(p.laps, 1);
    }

    #[test]
    fn test_balance_negative_is_strict() {
        let mut p = player();
        p.balance = 0.0;
        assert!(!p.is_balance_negative());
        p.balance = -0.01;
        assert!(p.is_balance_negative());
    }

    #[test]
    fn test_can_afford() {
        let mut p = player();
        p.balance = 100.0;
        assert!(p.can_afford(100.0));
        assert!(!p.can_afford(100.01));
    }

    #[test]
    fn test_display() {
        let p = player();
        let text = p.to_string();
        assert!(text.contains("id=1"));
        assert!(text.contains("Random"));
        assert!(text.contains("+300.00"));
    }
}
