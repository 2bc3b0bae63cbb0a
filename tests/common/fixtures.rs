//! Test fixtures - reusable vehicles and customers.

use chrono::{Datelike, NaiveDate};

use rental_core::{
    CarSpec, Customer, MotorcycleSpec, TruckSpec, Vehicle, VehicleCategory,
};

/// Fixed "today" used by every scenario
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Same month/day as `today`, `years` earlier
pub fn years_ago(years: i32) -> NaiveDate {
    let today = today();
    date(today.year() - years, today.month(), today.day())
}

pub fn standard_car(daily_rate: f64) -> Vehicle {
    Vehicle::new(
        "Peugeot",
        "208",
        VehicleCategory::Standard,
        2022,
        "GH-208-PG",
        CarSpec::default(),
    )
    .with_id("CAR-STD")
    .with_daily_rate(daily_rate)
    .unwrap()
}

pub fn motorcycle(engine_size: u32, daily_rate: f64) -> Vehicle {
    Vehicle::new(
        "Honda",
        "CB",
        VehicleCategory::Sport,
        2021,
        "MC-600-HD",
        MotorcycleSpec::new(engine_size),
    )
    .with_id("MOTO")
    .with_daily_rate(daily_rate)
    .unwrap()
}

pub fn truck(max_weight: f64, daily_rate: f64) -> Vehicle {
    Vehicle::new(
        "Iveco",
        "Eurocargo",
        VehicleCategory::Utility,
        2019,
        "TK-750-IV",
        TruckSpec::new(35.0, max_weight).with_tail_lift(true),
    )
    .with_id("TRUCK")
    .with_daily_rate(daily_rate)
    .unwrap()
}

/// A customer of `age` holding `licenses` for `years_licensed` years
pub fn customer(age: i32, licenses: &[&str], years_licensed: i32) -> Customer {
    Customer::new(
        "Camille",
        "Moreau",
        years_ago(age),
        "LIC-123456",
        licenses.iter().copied(),
        years_ago(years_licensed),
    )
    .with_id("CUST")
    .with_email("camille@example.com")
    .with_phone("+33 6 00 00 00 00")
}
