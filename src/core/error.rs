use thiserror::Error;

use crate::player::PlayerId;

/// Precondition violations raised before a match or simulation starts.
///
/// None of these are produced by the round loop itself once a match has been
/// constructed from valid input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("a match needs at least one player")]
    NoPlayers,

    #[error("duplicate player id: {0}")]
    DuplicatePlayerId(PlayerId),

    #[error("a match needs at least one property on the board")]
    EmptyBoard,

    #[error("invalid property (price {price}, rent {rent}): both must be positive and finite")]
    InvalidProperty { price: f64, rent: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("match ended without any active player")]
    NoSurvivors,
}

/// Convenience Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;
