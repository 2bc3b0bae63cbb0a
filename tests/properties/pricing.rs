//! Property tests for rental pricing tiers.

use proptest::prelude::*;

use rental_core::{
    CarSpec, MotorcycleSpec, RentalError, TruckSpec, Vehicle, VehicleCategory, VehicleKind,
};

fn vehicle(kind: VehicleKind, rate: f64) -> Vehicle {
    Vehicle::new("Brand", "Model", VehicleCategory::Standard, 2020, "PL-000-AT", kind)
        .with_daily_rate(rate)
        .unwrap()
}

fn kinds() -> impl Strategy<Value = VehicleKind> {
    prop_oneof![
        Just(VehicleKind::from(CarSpec::default())),
        (1.0f64..20_000.0).prop_map(|w| VehicleKind::from(TruckSpec::new(20.0, w))),
        (50u32..1_800).prop_map(|cc| VehicleKind::from(MotorcycleSpec::new(cc))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: cost = rate * days * factor (+ 5/day for motorcycles), with the
    /// factor set by the duration tier.
    #[test]
    fn property_cost_follows_duration_tiers(
        kind in kinds(),
        rate in 0.0f64..500.0,
        days in 1i64..400,
    ) {
        let factor = if days >= 30 {
            0.80
        } else if days >= 7 {
            0.90
        } else {
            1.0
        };
        let surcharge = match kind {
            VehicleKind::Motorcycle(_) => 5.0 * days as f64,
            _ => 0.0,
        };

        let cost = vehicle(kind, rate).calculate_rental_cost(days).unwrap();

        prop_assert_eq!(cost, rate * days as f64 * factor + surcharge);
    }

    /// PROPERTY: a non-positive day count always fails.
    #[test]
    fn property_non_positive_days_fail(
        kind in kinds(),
        days in -1_000i64..=0,
    ) {
        let result = vehicle(kind, 50.0).calculate_rental_cost(days);
        prop_assert!(
            matches!(result, Err(RentalError::InvalidRentalDays { days: d }) if d == days),
            "expected InvalidRentalDays"
        );
    }

    /// PROPERTY: one more day never makes a rental cheaper within the same tier.
    #[test]
    fn property_cost_monotonic_within_tier(
        rate in 1.0f64..500.0,
        days in prop_oneof![1i64..6, 7i64..29, 30i64..400],
    ) {
        let car = vehicle(CarSpec::default().into(), rate);
        let shorter = car.calculate_rental_cost(days).unwrap();
        let longer = car.calculate_rental_cost(days + 1).unwrap();
        prop_assert!(longer > shorter);
    }
}
