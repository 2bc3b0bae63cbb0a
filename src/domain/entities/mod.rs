//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Vehicle` - A rentable unit of the fleet (car, truck or motorcycle)
//! - `Customer` - A person renting from the agency
//! - `Rental` - Binds a customer to a vehicle for a period

mod customer;
mod rental;
mod vehicle;

pub use customer::{Customer, CustomerSnapshot};
pub use rental::{Rental, RentalQuote};
pub use vehicle::{Vehicle, VehicleSnapshot, DEFAULT_MAINTENANCE_KM};
