#![no_main]

use libfuzzer_sys::fuzz_target;
use rental_core::{Customer, CustomerSnapshot};

fuzz_target!(|data: &[u8]| {
    let Ok(snapshot) = serde_json::from_slice::<CustomerSnapshot>(data) else {
        return;
    };
    if let Ok(mut customer) = Customer::from_snapshot(snapshot) {
        assert!(customer
            .active_rentals()
            .iter()
            .all(|id| customer.rental_history().contains(id)));
        let _ = customer.can_rent_vehicle("B", 21);
        if let Some(first) = customer.active_rentals().first().cloned() {
            let total = customer.total_rentals();
            assert!(customer.complete_rental(&first));
            assert_eq!(customer.total_rentals(), total);
        }
    }
});
