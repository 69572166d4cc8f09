//! Players: per-match state and purchase policies.

pub mod policy;
pub mod types;

pub use policy::PurchasePolicy;
pub use types::{Player, PlayerId};
