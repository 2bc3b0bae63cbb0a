//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod eligibility;
mod ids;
mod maintenance_record;
mod vehicle_category;
mod vehicle_kind;
mod vehicle_state;

pub use config_warning::ConfigWarning;
pub use eligibility::{Eligibility, Refusal, MIN_YEARS_LICENSED};
pub use ids::{CustomerId, RentalId, VehicleId};
pub use maintenance_record::{MaintenanceEvent, MaintenanceRecord};
pub use vehicle_category::VehicleCategory;
pub use vehicle_kind::{
    CarSpec, FuelType, MotorcycleSpec, MotorcycleStyle, Transmission, TruckSpec, VehicleKind,
};
pub use vehicle_state::VehicleState;
