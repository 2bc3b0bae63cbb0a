//! Configuration module for rental-core
//!
//! Configuration hierarchy:
//! 1. Environment variables (RENTAL_*)
//! 2. Project config (.rental/config.toml)
//! 3. User config (<config dir>/rental-core/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{parse_with_warnings, with_overrides_from, PROJECT_CONFIG_PATH, USER_CONFIG_PATH};
pub use types::{AgencyConfig, LoyaltyConfig, MaintenanceConfig, PricingConfig};
