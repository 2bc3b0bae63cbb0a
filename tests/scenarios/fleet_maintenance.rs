//! Scenario: Fleet maintenance round
//!
//! Journey: the workshop lists vehicles past the service threshold, services
//! them, and puts them back on the rental floor.

use rental_core::domain::services::fleet_queries;
use rental_core::{AgencyConfig, FixedClock, RentalDesk, Vehicle, VehicleState};

use crate::common::*;

fn fleet() -> Vec<Vehicle> {
    vec![
        standard_car(40.0)
            .with_id("CAR-1")
            .with_mileage(11_000.0)
            .unwrap(),
        standard_car(40.0)
            .with_id("CAR-2")
            .with_mileage(2_000.0)
            .unwrap(),
        truck(3_000.0, 80.0)
            .with_id("VAN-1")
            .with_mileage(25_000.0)
            .unwrap(),
    ]
}

#[test]
fn scenario_service_due_vehicles() {
    let desk = RentalDesk::new(AgencyConfig::default(), FixedClock::on(today()));
    let mut fleet = fleet();

    let due: Vec<String> = desk
        .vehicles_needing_maintenance(&fleet)
        .iter()
        .map(|v| v.id().to_string())
        .collect();
    assert_eq!(due, ["CAR-1", "VAN-1"]);

    for vehicle in fleet.iter_mut().filter(|v| due.contains(&v.id().to_string())) {
        assert!(vehicle.send_to_maintenance("scheduled service"));
        assert_eq!(vehicle.state(), VehicleState::Maintenance);
        assert!(!vehicle.rent());
        assert!(vehicle.complete_maintenance("scheduled service", 150.0));
    }

    assert!(desk.vehicles_needing_maintenance(&fleet).is_empty());
    assert_eq!(fleet_queries::available(&fleet).count(), 3);
    assert!(fleet
        .iter()
        .filter(|v| due.contains(&v.id().to_string()))
        .all(|v| v.last_maintenance_date().is_some() && v.maintenance_history().len() == 2));
}

#[test]
fn scenario_rented_vehicle_cannot_enter_workshop() {
    let mut car = standard_car(40.0);
    car.rent();

    assert!(!car.send_to_maintenance("noise"));
    assert_eq!(car.state(), VehicleState::Rented);
    assert!(!car.complete_maintenance("noise", 0.0));
}
