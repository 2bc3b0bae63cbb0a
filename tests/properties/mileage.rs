//! Property tests for the odometer invariant.

use proptest::prelude::*;

use rental_core::{CarSpec, RentalError, Vehicle, VehicleCategory, VehicleState};

fn fresh_vehicle(start: f64) -> Vehicle {
    Vehicle::new(
        "Dacia",
        "Sandero",
        VehicleCategory::Economy,
        2020,
        "DS-000-00",
        CarSpec::default(),
    )
    .with_mileage(start)
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Across any sequence of rent/return cycles, mileage never decreases,
    /// and a lower reading fails without touching the vehicle.
    #[test]
    fn property_mileage_is_non_decreasing(
        start in 0.0f64..50_000.0,
        readings in proptest::collection::vec(proptest::option::of(0.0f64..100_000.0), 1..20)
    ) {
        let mut vehicle = fresh_vehicle(start);

        for reading in readings {
            prop_assert!(vehicle.rent());
            let before = vehicle.mileage();

            match vehicle.return_vehicle(reading) {
                Ok(returned) => {
                    prop_assert!(returned);
                    prop_assert_eq!(vehicle.state(), VehicleState::Available);
                    prop_assert_eq!(vehicle.mileage(), reading.unwrap_or(before));
                }
                Err(RentalError::MileageDecrease { current, requested }) => {
                    prop_assert_eq!(current, before);
                    prop_assert_eq!(Some(requested), reading);
                    prop_assert_eq!(vehicle.mileage(), before);
                    prop_assert_eq!(vehicle.state(), VehicleState::Rented);
                    // Close the rental so the next cycle can start
                    prop_assert!(vehicle.return_vehicle(None).unwrap());
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }

            prop_assert!(vehicle.mileage() >= before);
        }
    }

    /// PROPERTY: rent() on a vehicle that is not available fails and leaves state unchanged.
    #[test]
    fn property_rent_fails_outside_available(in_maintenance in any::<bool>()) {
        let mut vehicle = fresh_vehicle(0.0);
        if in_maintenance {
            vehicle.send_to_maintenance("check");
        } else {
            vehicle.rent();
        }
        let state = vehicle.state();

        prop_assert!(!vehicle.rent());
        prop_assert!(!vehicle.rent());
        prop_assert_eq!(vehicle.state(), state);
    }
}
