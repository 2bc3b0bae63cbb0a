//! Vehicle Policy
//!
//! Per-variant rental rules: who may drive a vehicle and what it costs.
//! These are pure functions over the variant tag and category, so entities
//! never need virtual dispatch to answer them.

use crate::domain::value_objects::{VehicleCategory, VehicleKind};
use crate::error::{RentalError, RentalResult};

/// Above this authorised weight (kg) a truck needs a C1 license
pub const LIGHT_TRUCK_MAX_WEIGHT: f64 = 3500.0;
/// Above this authorised weight (kg) a truck needs a full C license
pub const MEDIUM_TRUCK_MAX_WEIGHT: f64 = 7500.0;
/// Above this displacement (cc) a motorcycle needs a full A license
pub const LIGHT_MOTORCYCLE_MAX_CC: u32 = 125;
/// Flat insurance surcharge per rental day for motorcycles
pub const MOTORCYCLE_INSURANCE_PER_DAY: f64 = 5.0;

/// Minimum age of a driver allowed to rent this vehicle
pub fn minimum_driver_age(kind: &VehicleKind, category: VehicleCategory) -> u32 {
    match kind {
        VehicleKind::Car(_) => match category {
            VehicleCategory::Luxury | VehicleCategory::Sport => 25,
            VehicleCategory::Premium => 23,
            _ => 21,
        },
        VehicleKind::Truck(truck) => {
            if truck.max_weight > LIGHT_TRUCK_MAX_WEIGHT {
                21
            } else {
                18
            }
        }
        VehicleKind::Motorcycle(moto) => {
            if moto.engine_size > LIGHT_MOTORCYCLE_MAX_CC {
                20
            } else {
                18
            }
        }
    }
}

/// License code a driver must hold to rent this vehicle
pub fn required_license(kind: &VehicleKind) -> &'static str {
    match kind {
        VehicleKind::Car(_) => "B",
        VehicleKind::Truck(truck) => {
            if truck.max_weight > MEDIUM_TRUCK_MAX_WEIGHT {
                "C"
            } else if truck.max_weight > LIGHT_TRUCK_MAX_WEIGHT {
                "C1"
            } else {
                "B"
            }
        }
        VehicleKind::Motorcycle(moto) => {
            if moto.engine_size > LIGHT_MOTORCYCLE_MAX_CC {
                "A"
            } else {
                "A1"
            }
        }
    }
}

/// Multiplier applied to the base cost for a rental of `days` days
///
/// 30 days and more: 20% off. 7 to 29 days: 10% off. Shorter: full price.
pub fn duration_factor(days: i64) -> f64 {
    if days >= 30 {
        0.80
    } else if days >= 7 {
        0.90
    } else {
        1.0
    }
}

/// Flat surcharge added after the duration discount
pub fn surcharge(kind: &VehicleKind, days: i64) -> f64 {
    match kind {
        VehicleKind::Motorcycle(_) => MOTORCYCLE_INSURANCE_PER_DAY * days as f64,
        VehicleKind::Car(_) | VehicleKind::Truck(_) => 0.0,
    }
}

/// Validate a requested rental length and narrow it to the stored width
pub fn rental_days(days: i64) -> RentalResult<u32> {
    if days <= 0 {
        return Err(RentalError::InvalidRentalDays { days });
    }
    u32::try_from(days).map_err(|_| RentalError::RentalTooLong {
        days,
        max: u32::MAX,
    })
}

/// Rental cost of a vehicle for `days` days
///
/// Fails with `InvalidRentalDays` when `days <= 0` and `RentalTooLong` when
/// the period does not fit a rental contract.
pub fn rental_cost(kind: &VehicleKind, daily_rate: f64, days: i64) -> RentalResult<f64> {
    rental_days(days)?;

    let base_cost = daily_rate * days as f64;
    Ok(base_cost * duration_factor(days) + surcharge(kind, days))
}
