#![no_main]

use libfuzzer_sys::fuzz_target;
use rental_core::{Vehicle, VehicleSnapshot};

fuzz_target!(|data: &[u8]| {
    let Ok(snapshot) = serde_json::from_slice::<VehicleSnapshot>(data) else {
        return;
    };
    if let Ok(vehicle) = Vehicle::from_snapshot(snapshot) {
        // Anything accepted must satisfy the vehicle invariants
        assert!(vehicle.daily_rate() >= 0.0);
        assert!(vehicle.mileage() >= 0.0);
        let _ = vehicle.calculate_rental_cost(7);
        let _ = vehicle.needs_maintenance(10_000.0);
    }
});
