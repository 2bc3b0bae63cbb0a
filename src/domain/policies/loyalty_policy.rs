//! Loyalty Policy
//!
//! Loyalty discounts depend only on how many rentals a customer has ever
//! made, active or completed.

use serde::{Deserialize, Serialize};

/// Default number of rentals after which a customer counts as loyal
pub const DEFAULT_LOYAL_MIN_RENTALS: usize = 5;

/// Discount tier derived from the total rental count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyTier {
    #[default]
    None,
    /// 5 rentals or more
    Bronze,
    /// 10 rentals or more
    Silver,
    /// 20 rentals or more
    Gold,
}

impl LoyaltyTier {
    /// Tier reached after `total_rentals` rentals
    pub fn for_rentals(total_rentals: usize) -> Self {
        match total_rentals {
            n if n >= 20 => LoyaltyTier::Gold,
            n if n >= 10 => LoyaltyTier::Silver,
            n if n >= 5 => LoyaltyTier::Bronze,
            _ => LoyaltyTier::None,
        }
    }

    /// Discount as a fraction of the price (0.0 to 0.15)
    pub fn discount(&self) -> f64 {
        match self {
            LoyaltyTier::None => 0.0,
            LoyaltyTier::Bronze => 0.05,
            LoyaltyTier::Silver => 0.10,
            LoyaltyTier::Gold => 0.15,
        }
    }
}

/// Whether a customer with `total_rentals` rentals counts as loyal
pub fn is_loyal(total_rentals: usize, min_rentals: usize) -> bool {
    total_rentals >= min_rentals
}
