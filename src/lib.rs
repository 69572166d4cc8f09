//! Estate Sim - property-trading board game simulator
//!
//! Plays repeated matches between four purchase policies and reports which
//! one wins most often.

pub mod core;
pub mod game;
pub mod logging;
pub mod player;
pub mod property;
pub mod simulator;

pub use crate::core::error::{Result, SimError};
pub use game::{Match, MatchOutcome};
pub use player::{Player, PlayerId, PurchasePolicy};
pub use property::Property;
pub use simulator::{run_simulation, SimConfig, SimReport};
