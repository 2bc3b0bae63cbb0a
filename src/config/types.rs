//! Configuration types

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_MAINTENANCE_KM;
use crate::domain::policies::loyalty_policy::DEFAULT_LOYAL_MIN_RENTALS;
use crate::domain::value_objects::ConfigWarning;
use crate::error::RentalResult;

use super::loader;

/// Maintenance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceConfig {
    /// Kilometres between two workshop visits
    #[serde(default = "default_km_threshold")]
    pub km_threshold: f64,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            km_threshold: default_km_threshold(),
        }
    }
}

fn default_km_threshold() -> f64 {
    DEFAULT_MAINTENANCE_KM
}

/// Loyalty configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyConfig {
    /// Rentals needed before a customer is flagged as loyal
    #[serde(default = "default_min_rentals")]
    pub min_rentals: usize,
}

impl Default for LoyaltyConfig {
    fn default() -> Self {
        Self {
            min_rentals: default_min_rentals(),
        }
    }
}

fn default_min_rentals() -> usize {
    DEFAULT_LOYAL_MIN_RENTALS
}

/// Pricing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Subtract the customer's loyalty discount from quotes
    #[serde(default = "default_true")]
    pub apply_loyalty_discount: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            apply_loyalty_discount: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Agency configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AgencyConfig {
    #[serde(default)]
    pub maintenance: MaintenanceConfig,

    #[serde(default)]
    pub loyalty: LoyaltyConfig,

    #[serde(default)]
    pub pricing: PricingConfig,
}

impl AgencyConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RentalResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RentalResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (RENTAL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
