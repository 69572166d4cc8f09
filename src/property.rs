//! Board spaces that can be bought and then collect rent.

use crate::core::constants::{
    PROPERTY_PRICE_MAX, PROPERTY_PRICE_MIN, PROPERTY_RENT_MAX, PROPERTY_RENT_MIN,
};
use crate::core::error::{Result, SimError};
use crate::player::PlayerId;
use rand::Rng;
use serde::Serialize;

/// A purchasable board space.
///
/// The owner is a plain id lookup. Only the match engine assigns or clears it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    price: f64,
    rent: f64,
    owner: Option<PlayerId>,
}

impl Property {
    /// Create an unowned property. Price and rent must be finite and positive.
    pub fn new(price: f64, rent: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(price) || !valid(rent) {
            return Err(SimError::InvalidProperty { price, rent });
        }
        Ok(Self {
            price,
            rent,
            owner: None,
        })
    }

    /// Draw price and rent from the fixed board ranges.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            price: rng.gen_range(PROPERTY_PRICE_MIN..PROPERTY_PRICE_MAX),
            rent: rng.gen_range(PROPERTY_RENT_MIN..PROPERTY_RENT_MAX),
            owner: None,
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn rent(&self) -> f64 {
        self.rent
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub fn has_no_owner(&self) -> bool {
        self.owner.is_none()
    }

    pub fn is_owned_by(&self, id: PlayerId) -> bool {
        self.owner == Some(id)
    }

    pub(crate) fn set_owner(&mut self, id: PlayerId) {
        self.owner = Some(id);
    }

    pub(crate) fn clear_owner(&mut self) {
        self.owner = None;
    }
}

/// Generate `count` independently randomized properties in board order.
///
/// Prices and rents are not required to be unique.
pub fn generate_board(count: usize, rng: &mut impl Rng) -> Vec<Property> {
    (0..count).map(|_| Property::random(rng)).collect()
}
