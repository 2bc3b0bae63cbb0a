//! Property tests for the loyalty step function.

use chrono::NaiveDate;
use proptest::prelude::*;

use rental_core::{Customer, LoyaltyTier, RentalId};

fn customer_with_rentals(n: usize) -> Customer {
    let mut customer = Customer::new(
        "Loyal",
        "Client",
        NaiveDate::from_ymd_opt(1980, 5, 5).unwrap(),
        "L-1",
        ["B"],
        NaiveDate::from_ymd_opt(2000, 5, 5).unwrap(),
    );
    for i in 0..n {
        let id = RentalId::new(format!("R{}", i));
        customer.add_rental(id.clone());
        customer.complete_rental(&id);
    }
    customer
}

fn expected_discount(n: usize) -> f64 {
    if n >= 20 {
        0.15
    } else if n >= 10 {
        0.10
    } else if n >= 5 {
        0.05
    } else {
        0.0
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the discount depends only on total history length.
    #[test]
    fn property_discount_is_step_of_history(n in 0usize..40) {
        let customer = customer_with_rentals(n);
        prop_assert_eq!(customer.loyalty_discount(), expected_discount(n));
        prop_assert_eq!(customer.loyalty_tier(), LoyaltyTier::for_rentals(n));
        prop_assert!(customer.active_rentals().is_empty());
    }

    /// PROPERTY: one more rental never lowers the discount.
    #[test]
    fn property_discount_never_decreases(n in 0usize..40) {
        prop_assert!(
            LoyaltyTier::for_rentals(n + 1).discount() >= LoyaltyTier::for_rentals(n).discount()
        );
    }

    /// PROPERTY: is_loyal_customer(k) iff history length >= k.
    #[test]
    fn property_loyal_threshold(n in 0usize..30, k in 0usize..30) {
        prop_assert_eq!(customer_with_rentals(n).is_loyal_customer(k), n >= k);
    }
}
