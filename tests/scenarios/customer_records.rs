//! Scenario: Customer record maintenance
//!
//! Journey: the front office completes rentals, blocks a customer, and edits
//! a customer record without losing the accumulated history.

use rental_core::{Customer, RentalId};

use crate::common::*;

#[test]
fn scenario_complete_unknown_rental_changes_nothing() {
    let mut client = customer(40, &["B"], 20);
    client.add_rental(RentalId::new("R2"));

    assert!(!client.complete_rental(&RentalId::new("R1")));

    assert_eq!(client.rental_history(), &[RentalId::new("R2")]);
    assert_eq!(client.active_rentals(), &[RentalId::new("R2")]);
}

#[test]
fn scenario_blocked_customer_refused_with_reason() {
    let mut client = customer(40, &["B"], 20);
    client.block("unpaid damages");

    let car = standard_car(40.0);
    let outcome =
        client.can_rent_vehicle_on(car.required_license(), car.minimum_driver_age(), today());

    assert!(!outcome.is_eligible());
    assert!(outcome.reason().contains("unpaid damages"));
}

#[test]
fn scenario_edit_customer_keeps_history() {
    let mut client = customer(40, &["B"], 20);
    for id in ["R1", "R2", "R3"] {
        client.add_rental(RentalId::new(id));
    }
    client.complete_rental(&RentalId::new("R1"));

    // The edit form round-trips through JSON
    let json = serde_json::to_string(&client.snapshot_with(today(), 5)).unwrap();
    let mut edited: rental_core::CustomerSnapshot = serde_json::from_str(&json).unwrap();
    edited.phone = "+33 7 11 22 33 44".to_string();
    edited.address = "12 rue des Lilas, Lyon".to_string();

    let restored = Customer::from_snapshot(edited).unwrap();

    assert_eq!(restored.phone(), "+33 7 11 22 33 44");
    assert_eq!(restored.address(), "12 rue des Lilas, Lyon");
    assert_eq!(restored.total_rentals(), 3);
    assert_eq!(
        restored.active_rentals(),
        &[RentalId::new("R2"), RentalId::new("R3")]
    );
    assert_eq!(restored.age_on(today()), 40);
}

#[test]
fn scenario_front_office_summaries() {
    let mut client = customer(40, &["B"], 20);
    insta::assert_snapshot!(client.display_on(today()), @"Customer CUST: Camille Moreau (40 years)");

    client.block("unpaid damages");
    let car = standard_car(40.0);
    let outcome =
        client.can_rent_vehicle_on(car.required_license(), car.minimum_driver_age(), today());

    insta::assert_snapshot!(car.to_string(), @"Car Peugeot 208 (2022) - GH-208-PG");
    insta::assert_snapshot!(outcome.reason(), @"customer blocked: unpaid damages");
}
