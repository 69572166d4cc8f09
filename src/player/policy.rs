//! Purchase policies.
//!
//! A policy only answers the behavioral half of a purchase decision. The
//! match engine checks that the property is unowned and affordable first.

use super::types::Player;
use crate::core::constants::{PICKY_MIN_RENT, RANDOM_BUY_PROBABILITY, WARY_MIN_RESERVE};
use crate::property::Property;
use rand::Rng;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PurchasePolicy {
    /// Buys anything it lands on
    Impulsive,
    /// Buys only when rent is above [`PICKY_MIN_RENT`]
    Picky,
    /// Buys only if [`WARY_MIN_RESERVE`] is left afterwards
    Wary,
    /// Buys with probability [`RANDOM_BUY_PROBABILITY`]
    Random,
}

impl PurchasePolicy {
    /// All policies in roster (turn) order
    pub const ALL: [PurchasePolicy; 4] = [
        PurchasePolicy::Impulsive,
        PurchasePolicy::Picky,
        PurchasePolicy::Wary,
        PurchasePolicy::Random,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn name(&self) -> &'static str {
        match self {
            PurchasePolicy::Impulsive => "Impulsive",
            PurchasePolicy::Picky => "Picky",
            PurchasePolicy::Wary => "Wary",
            PurchasePolicy::Random => "Random",
        }
    }

    /// Position in [`PurchasePolicy::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PurchasePolicy::Impulsive => 0,
            PurchasePolicy::Picky => 1,
            PurchasePolicy::Wary => 2,
            PurchasePolicy::Random => 3,
        }
    }

    /// Behavioral decision for `player` buying `property`.
    ///
    /// Only `Random` draws from `rng`; the others are pure.
    pub fn decide(&self, property: &Property, player: &Player, rng: &mut impl Rng) -> bool {
        match self {
            PurchasePolicy::Impulsive => true,
            PurchasePolicy::Picky => property.rent() > PICKY_MIN_RENT,
            PurchasePolicy::Wary => player.balance - property.price() >= WARY_MIN_RESERVE,
            PurchasePolicy::Random => rng.gen_bool(RANDOM_BUY_PROBABILITY),
        }
    }
}

impl fmt::Display for PurchasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
