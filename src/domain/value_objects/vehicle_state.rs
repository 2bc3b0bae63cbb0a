//! VehicleState value object - where a vehicle sits in its lifecycle
//!
//! - `Available` → `Rented` via `rent()`
//! - `Rented` → `Available` via `return_vehicle()`
//! - anything but `Rented` → `Maintenance` via `send_to_maintenance()`
//! - `Maintenance` → `Available` via `complete_maintenance()`
//! - anything but `Rented` → `OutOfService` via `take_out_of_service()`

use serde::{Deserialize, Serialize};

/// Lifecycle state of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VehicleState {
    /// Ready to be rented
    #[default]
    Available,
    /// Currently out with a customer
    Rented,
    /// In the workshop
    Maintenance,
    /// Withdrawn from the fleet by an administrator
    OutOfService,
}

impl VehicleState {
    pub fn is_available(&self) -> bool {
        matches!(self, VehicleState::Available)
    }

    pub fn is_rented(&self) -> bool {
        matches!(self, VehicleState::Rented)
    }
}

impl std::fmt::Display for VehicleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleState::Available => write!(f, "available"),
            VehicleState::Rented => write!(f, "rented"),
            VehicleState::Maintenance => write!(f, "in maintenance"),
            VehicleState::OutOfService => write!(f, "out of service"),
        }
    }
}
