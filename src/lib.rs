//! rental-core - vehicle-rental domain model
//!
//! Vehicles (cars, trucks, motorcycles) with their rental state machine and
//! pricing, customers with eligibility and loyalty rules, and the desk
//! service that ties them together into rentals. Storage, UI and any command
//! surface are left to the embedding application.

pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use config::AgencyConfig;
pub use domain::entities::{
    Customer, CustomerSnapshot, Rental, RentalQuote, Vehicle, VehicleSnapshot,
};
pub use domain::policies::LoyaltyTier;
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use domain::services::RentalDesk;
pub use domain::value_objects::{
    CarSpec, CustomerId, Eligibility, MotorcycleSpec, Refusal, RentalId, TruckSpec,
    VehicleCategory, VehicleId, VehicleKind, VehicleState,
};
pub use error::{RentalError, RentalResult};
