//! Match engine: the round loop and its outcome record.

pub mod engine;
pub mod outcome;

pub use engine::{roll_die, LandingAction, Match, TurnReport};
pub use outcome::{MatchOutcome, PlayerStanding};
