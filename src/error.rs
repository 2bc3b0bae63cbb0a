//! Error types for rental-core
//!
//! Invalid arguments and orchestration refusals are reported through
//! `RentalError`. Illegal state transitions on a single vehicle stay boolean
//! and eligibility stays a structured [`Eligibility`] value.
//!
//! [`Eligibility`]: crate::domain::value_objects::Eligibility

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::{CustomerId, Refusal, RentalId, VehicleId, VehicleState};

/// Result type alias for rental-core operations
pub type RentalResult<T> = Result<T, RentalError>;

/// Main error type for rental-core operations
#[derive(Error, Debug)]
pub enum RentalError {
    /// Daily rate below zero or not a finite number
    #[error("daily rate must be a non-negative number (got {rate})")]
    NegativeDailyRate { rate: f64 },

    /// Mileage below zero or not a finite number
    #[error("mileage must be a non-negative number (got {mileage})")]
    NegativeMileage { mileage: f64 },

    /// New mileage reading lower than the recorded one
    #[error("mileage cannot decrease (current {current}, requested {requested})")]
    MileageDecrease { current: f64, requested: f64 },

    /// Rental period of zero or fewer days
    #[error("number of rental days must be positive (got {days})")]
    InvalidRentalDays { days: i64 },

    /// Rental period longer than a contract can hold
    #[error("number of rental days is too large (got {days}, maximum {max})")]
    RentalTooLong { days: i64, max: u32 },

    /// Snapshot that would break an entity invariant
    #[error("invalid {entity} snapshot: {message}")]
    InvalidSnapshot {
        entity: &'static str,
        message: String,
    },

    /// Customer failed the eligibility check for the requested vehicle
    #[error("customer {customer} cannot rent: {refusal}")]
    NotEligible {
        customer: CustomerId,
        refusal: Refusal,
    },

    /// Vehicle is not in a state that allows the requested transition
    #[error("vehicle {vehicle} is {state}")]
    VehicleUnavailable {
        vehicle: VehicleId,
        state: VehicleState,
    },

    /// Rental does not belong to the customer or vehicle it was used with
    #[error("rental {rental}: {message}")]
    RentalMismatch { rental: RentalId, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RentalError {
    /// True for errors caused by a bad input value (as opposed to a refusal
    /// or an environment problem). The caller must fix the input before retrying.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RentalError::NegativeDailyRate { .. }
                | RentalError::NegativeMileage { .. }
                | RentalError::MileageDecrease { .. }
                | RentalError::InvalidRentalDays { .. }
                | RentalError::RentalTooLong { .. }
                | RentalError::InvalidSnapshot { .. }
        )
    }
}
