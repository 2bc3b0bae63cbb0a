//! Rental entity - binds a customer to a vehicle for a period
//!
//! A rental has no policy of its own; the desk service decides whether it
//! may exist and keeps the customer and vehicle in step with it.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::policies::vehicle_policy;
use crate::domain::value_objects::{CustomerId, RentalId, VehicleId};
use crate::error::RentalResult;

/// A rental contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    id: RentalId,
    customer_id: CustomerId,
    vehicle_id: VehicleId,
    start_date: NaiveDate,
    days: u32,
}

impl Rental {
    /// Create a rental with a generated id. `days` must be positive.
    pub fn new(
        customer_id: CustomerId,
        vehicle_id: VehicleId,
        start_date: NaiveDate,
        days: i64,
    ) -> RentalResult<Self> {
        let days = vehicle_policy::rental_days(days)?;

        Ok(Self {
            id: RentalId::generate(),
            customer_id,
            vehicle_id,
            start_date,
            days,
        })
    }

    /// Builder: use an existing id
    pub fn with_id(mut self, id: impl Into<RentalId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &RentalId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Day the vehicle is due back (exclusive end of the period)
    pub fn end_date(&self) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// True if `date` falls inside the rental period
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date < self.end_date()
    }
}

/// Price breakdown for a prospective rental
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentalQuote {
    pub days: u32,
    /// Vehicle price for the period (duration discount and surcharges included)
    pub base_cost: f64,
    /// Loyalty discount fraction applied to `base_cost`
    pub loyalty_discount: f64,
    pub discount_amount: f64,
    pub total: f64,
}

impl RentalQuote {
    pub fn new(days: u32, base_cost: f64, loyalty_discount: f64) -> Self {
        let discount_amount = base_cost * loyalty_discount;
        Self {
            days,
            base_cost,
            loyalty_discount,
            discount_amount,
            total: base_cost - discount_amount,
        }
    }
}
