//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain values.

pub mod age;
pub mod loyalty_policy;
pub mod vehicle_policy;

pub use loyalty_policy::LoyaltyTier;
