//! Scenario: Standard car for ten days
//!
//! Journey: a 22-year-old customer holding a B license for 3 years rents a
//! standard car at 40/day for 10 days, then brings it back.
//!
//! Success Criteria:
//! - Eligibility passes (min age 21, license B, licensed >= 1 year)
//! - Price is 40 x 10 x 0.90 = 360
//! - After return the car is available again with the new mileage

use rental_core::{AgencyConfig, FixedClock, RentalDesk, VehicleState};

use crate::common::*;

#[test]
fn scenario_standard_car_ten_days() {
    let desk = RentalDesk::new(AgencyConfig::default(), FixedClock::on(today()));
    let mut renter = customer(22, &["B"], 3);
    let mut car = standard_car(40.0);

    // Step 1: read the vehicle requirements
    assert_eq!(car.required_license(), "B");
    assert_eq!(car.minimum_driver_age(), 21);

    // Step 2: eligibility
    let outcome = renter.can_rent_vehicle_on(car.required_license(), car.minimum_driver_age(), today());
    assert!(outcome.is_eligible(), "expected eligible, got: {}", outcome.reason());

    // Step 3: price
    assert_cost(car.calculate_rental_cost(10).unwrap(), 360.0);
    let quote = desk.quote(&renter, &car, 10).unwrap();
    assert_cost(quote.total, 360.0);

    // Step 4: open the rental
    let rental = desk.open(&mut renter, &mut car, today(), 10).unwrap();
    assert_eq!(car.state(), VehicleState::Rented);
    assert_eq!(renter.active_rentals(), &[rental.id().clone()]);

    // Step 5: the car cannot be rented twice
    let mut other = customer(30, &["B"], 10);
    assert!(desk.open(&mut other, &mut car, today(), 2).is_err());
    assert!(other.rental_history().is_empty());

    // Step 6: return with 812 km driven
    desk.close(&rental, &mut renter, &mut car, Some(812.0)).unwrap();
    assert_eq!(car.state(), VehicleState::Available);
    assert_eq!(car.mileage(), 812.0);
    assert!(renter.active_rentals().is_empty());
    assert_eq!(renter.rental_history(), &[rental.id().clone()]);
}

#[test]
fn scenario_return_without_mileage_keeps_odometer() {
    let mut car = standard_car(40.0).with_mileage(5_000.0).unwrap();

    assert!(car.rent());
    assert!(car.return_vehicle(None).unwrap());

    assert_eq!(car.state(), VehicleState::Available);
    assert_eq!(car.mileage(), 5_000.0);
}

#[test]
fn scenario_month_long_rental_gets_twenty_percent_off() {
    let car = standard_car(40.0);
    assert_cost(car.calculate_rental_cost(30).unwrap(), 960.0);
    assert_cost(car.calculate_rental_cost(6).unwrap(), 240.0);
}
