//! Property tests for full-year age computation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use rental_core::Customer;

fn customer_born(birth: NaiveDate) -> Customer {
    Customer::new(
        "Prop",
        "Test",
        birth,
        "L-0",
        ["B"],
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: born on today's month/day => age is the plain year difference.
    #[test]
    fn property_birthday_today_is_year_difference(
        birth_year in 1930i32..2015,
        today_year in 2016i32..2040,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let birth = NaiveDate::from_ymd_opt(birth_year, month, day).unwrap();
        let today = NaiveDate::from_ymd_opt(today_year, month, day).unwrap();

        prop_assert_eq!(customer_born(birth).age_on(today), today_year - birth_year);
    }

    /// PROPERTY: birthday tomorrow => one less than the year difference.
    #[test]
    fn property_birthday_tomorrow_is_decremented(
        birth_year in 1930i32..2015,
        today_year in 2016i32..2040,
        month in 1u32..=12,
        day in 1u32..=27,
    ) {
        let birth = NaiveDate::from_ymd_opt(birth_year, month, day + 1).unwrap();
        let today = NaiveDate::from_ymd_opt(today_year, month, day).unwrap();

        prop_assert_eq!(customer_born(birth).age_on(today), today_year - birth_year - 1);
    }

    /// PROPERTY: age never decreases as time passes.
    #[test]
    fn property_age_monotonic(
        birth_days in 0i64..30_000,
        offset in 0u64..20_000,
        step in 0u64..800,
    ) {
        let epoch = NaiveDate::from_ymd_opt(1930, 1, 1).unwrap();
        let birth = epoch + chrono::Duration::days(birth_days);
        let customer = customer_born(birth);
        let earlier = birth + chrono::Days::new(offset);
        let later = earlier + chrono::Days::new(step);

        prop_assert!(customer.age_on(later) >= customer.age_on(earlier));
        prop_assert!(customer.age_on(earlier) >= 0);
        prop_assert_eq!(customer.age_on(birth), 0);
        prop_assert!(customer.age_on(later) <= later.year() - birth.year());
    }
}
