//! Domain Services
//!
//! Stateless coordination over entities the caller owns.

pub mod fleet_queries;
mod rental_desk;

pub use rental_desk::RentalDesk;
