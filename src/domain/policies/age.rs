//! Age Policy
//!
//! Full-year counting shared by driver age and license seniority.

use chrono::{Datelike, NaiveDate};

/// Number of full years elapsed from `since` to `today`
///
/// The naive year difference is decremented by one when the anniversary of
/// `since` has not yet been reached this year. Negative when `since` lies in
/// the future.
pub fn full_years(since: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - since.year();
    if (today.month(), today.day()) < (since.month(), since.day()) {
        years - 1
    } else {
        years
    }
}
