//! Fleet queries
//!
//! The fleet itself lives outside the core; these filters work on whatever
//! iterator of vehicles the registry hands out.

use chrono::NaiveDate;

use crate::domain::entities::{Customer, Vehicle};

/// Vehicles that can be rented right now
pub fn available<'a, I>(vehicles: I) -> impl Iterator<Item = &'a Vehicle>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    vehicles.into_iter().filter(|v| v.is_available())
}

/// Vehicles due for a workshop visit
pub fn needing_maintenance<'a, I>(vehicles: I, km_threshold: f64) -> impl Iterator<Item = &'a Vehicle>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    vehicles
        .into_iter()
        .filter(move |v| v.needs_maintenance(km_threshold))
}

/// Available vehicles the customer is eligible to rent on `today`
pub fn rentable_by<'a, I>(
    vehicles: I,
    customer: &'a Customer,
    today: NaiveDate,
) -> impl Iterator<Item = &'a Vehicle>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    available(vehicles).filter(move |v| {
        customer
            .can_rent_vehicle_on(v.required_license(), v.minimum_driver_age(), today)
            .is_eligible()
    })
}
