//! Customer entity - a person renting from the agency
//!
//! Holds driving credentials, contact data, rental history and block
//! status. The eligibility check runs in a fixed order and stops at the
//! first failing rule:
//!
//! 1. blocked
//! 2. too young for the vehicle
//! 3. missing the required license
//! 4. license held for less than a full year

use std::collections::{BTreeSet, HashMap};

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::policies::age::full_years;
use crate::domain::policies::loyalty_policy::{self, LoyaltyTier, DEFAULT_LOYAL_MIN_RENTALS};
use crate::domain::value_objects::{
    CustomerId, Eligibility, Refusal, RentalId, MIN_YEARS_LICENSED,
};
use crate::error::{RentalError, RentalResult};

/// A customer of the agency
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
    license_number: String,
    /// Uppercased license codes ("A", "B", "C1", ...)
    license_types: BTreeSet<String>,
    license_date: NaiveDate,
    email: String,
    phone: String,
    address: String,
    /// Every rental ever opened, oldest first
    rental_history: Vec<RentalId>,
    /// Rentals not yet completed; always contained in `rental_history`
    active_rentals: Vec<RentalId>,
    created_at: NaiveDateTime,
    blocked: bool,
    blocked_reason: Option<String>,
}

fn normalize_license(code: &str) -> String {
    code.trim().to_uppercase()
}

impl Customer {
    /// Create a customer with a generated id, empty history and no block
    pub fn new<I, S>(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
        license_number: impl Into<String>,
        license_types: I,
        license_date: NaiveDate,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id: CustomerId::generate(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            license_number: license_number.into(),
            license_types: license_types
                .into_iter()
                .map(|code| normalize_license(code.as_ref()))
                .collect(),
            license_date,
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            rental_history: Vec::new(),
            active_rentals: Vec::new(),
            created_at: Local::now().naive_local(),
            blocked: false,
            blocked_reason: None,
        }
    }

    /// Builder: use an existing id
    pub fn with_id(mut self, id: impl Into<CustomerId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    // --- Getters ---

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn license_number(&self) -> &str {
        &self.license_number
    }

    pub fn license_types(&self) -> &BTreeSet<String> {
        &self.license_types
    }

    pub fn license_date(&self) -> NaiveDate {
        self.license_date
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn rental_history(&self) -> &[RentalId] {
        &self.rental_history
    }

    pub fn active_rentals(&self) -> &[RentalId] {
        &self.active_rentals
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn blocked_reason(&self) -> Option<&str> {
        self.blocked_reason.as_deref()
    }

    // --- Setters ---

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    // --- Derived values ---

    /// Age in full years on `today`
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        full_years(self.birth_date, today)
    }

    /// Age in full years today
    pub fn age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }

    /// One-line summary with the age as of `today`
    pub fn display_on(&self, today: NaiveDate) -> String {
        format!(
            "Customer {}: {} ({} years)",
            self.id,
            self.full_name(),
            self.age_on(today)
        )
    }

    /// Full years the license has been held on `today`
    pub fn years_of_license_on(&self, today: NaiveDate) -> i32 {
        full_years(self.license_date, today)
    }

    pub fn years_of_license(&self) -> i32 {
        self.years_of_license_on(Local::now().date_naive())
    }

    // --- Licenses ---

    /// Case-insensitive license lookup
    pub fn has_license(&self, license_type: &str) -> bool {
        self.license_types.contains(&normalize_license(license_type))
    }

    pub fn add_license_type(&mut self, license_type: &str) {
        self.license_types.insert(normalize_license(license_type));
    }

    // --- Eligibility ---

    /// Check whether the customer may rent a vehicle requiring
    /// `required_license` and drivers of at least `minimum_age`, as of today
    pub fn can_rent_vehicle(&self, required_license: &str, minimum_age: u32) -> Eligibility {
        self.can_rent_vehicle_on(required_license, minimum_age, Local::now().date_naive())
    }

    /// Same as [`can_rent_vehicle`](Self::can_rent_vehicle) evaluated on `today`
    pub fn can_rent_vehicle_on(
        &self,
        required_license: &str,
        minimum_age: u32,
        today: NaiveDate,
    ) -> Eligibility {
        if self.blocked {
            return Eligibility::Refused(Refusal::Blocked {
                reason: self.blocked_reason.clone(),
            });
        }

        let age = self.age_on(today);
        if i64::from(age) < i64::from(minimum_age) {
            return Eligibility::Refused(Refusal::TooYoung {
                age,
                minimum: minimum_age,
            });
        }

        if !self.has_license(required_license) {
            return Eligibility::Refused(Refusal::MissingLicense {
                required: normalize_license(required_license),
            });
        }

        let years = self.years_of_license_on(today);
        if years < MIN_YEARS_LICENSED {
            return Eligibility::Refused(Refusal::LicenseTooRecent { years });
        }

        Eligibility::Eligible
    }

    // --- Rental history ---

    /// Record a new rental in both history and active list
    ///
    /// Duplicate ids are accepted as-is.
    pub fn add_rental(&mut self, rental_id: RentalId) {
        self.rental_history.push(rental_id.clone());
        self.active_rentals.push(rental_id);
    }

    /// Remove a rental from the active list. Returns false if it was not
    /// active; history is never touched.
    pub fn complete_rental(&mut self, rental_id: &RentalId) -> bool {
        match self.active_rentals.iter().position(|id| id == rental_id) {
            Some(index) => {
                self.active_rentals.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_active_rental(&self, rental_id: &RentalId) -> bool {
        self.active_rentals.contains(rental_id)
    }

    pub fn total_rentals(&self) -> usize {
        self.rental_history.len()
    }

    // --- Blocking ---

    pub fn block(&mut self, reason: impl Into<String>) {
        self.blocked = true;
        self.blocked_reason = Some(reason.into());
    }

    pub fn unblock(&mut self) {
        self.blocked = false;
        self.blocked_reason = None;
    }

    // --- Loyalty ---

    pub fn is_loyal_customer(&self, min_rentals: usize) -> bool {
        loyalty_policy::is_loyal(self.total_rentals(), min_rentals)
    }

    pub fn loyalty_tier(&self) -> LoyaltyTier {
        LoyaltyTier::for_rentals(self.total_rentals())
    }

    /// Loyalty discount as a fraction (0.0 to 0.15)
    pub fn loyalty_discount(&self) -> f64 {
        self.loyalty_tier().discount()
    }

    // --- Snapshots ---

    /// Plain-data view as of today, with the default loyalty threshold
    pub fn snapshot(&self) -> CustomerSnapshot {
        self.snapshot_with(Local::now().date_naive(), DEFAULT_LOYAL_MIN_RENTALS)
    }

    /// Plain-data view as of `today`, counting loyalty from `loyal_min_rentals`
    pub fn snapshot_with(&self, today: NaiveDate, loyal_min_rentals: usize) -> CustomerSnapshot {
        CustomerSnapshot {
            id: self.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date: self.birth_date,
            license_number: self.license_number.clone(),
            license_types: self.license_types.iter().cloned().collect(),
            license_date: self.license_date,
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            rental_history: self.rental_history.clone(),
            active_rentals: self.active_rentals.clone(),
            is_blocked: self.blocked,
            blocked_reason: self.blocked_reason.clone(),
            created_at: Some(self.created_at),
            full_name: self.full_name(),
            age: self.age_on(today),
            years_of_license: self.years_of_license_on(today),
            total_rentals: self.total_rentals(),
            active_rental_count: self.active_rentals.len(),
            is_loyal: self.is_loyal_customer(loyal_min_rentals),
            loyalty_discount: self.loyalty_discount(),
        }
    }

    /// Rebuild a customer from a snapshot, keeping its accumulated history
    ///
    /// Used when a customer record is edited outside the core: the edited
    /// profile comes back as a snapshot and the history travels with it.
    /// Derived fields are ignored. Rejects an active rental missing from the
    /// history, and a block reason on an unblocked customer.
    pub fn from_snapshot(snapshot: CustomerSnapshot) -> RentalResult<Self> {
        let invalid = |message: String| RentalError::InvalidSnapshot {
            entity: "customer",
            message,
        };

        // Each active entry must be backed by its own history entry
        let mut unmatched: HashMap<&RentalId, usize> = HashMap::new();
        for id in &snapshot.rental_history {
            *unmatched.entry(id).or_default() += 1;
        }
        for id in &snapshot.active_rentals {
            match unmatched.get_mut(id) {
                Some(count) if *count > 0 => *count -= 1,
                _ => {
                    return Err(invalid(format!(
                        "active rental {} is missing from the rental history",
                        id
                    )))
                }
            }
        }
        if !snapshot.is_blocked && snapshot.blocked_reason.is_some() {
            return Err(invalid(
                "block reason set on a customer that is not blocked".to_string(),
            ));
        }

        Ok(Self {
            id: snapshot.id,
            first_name: snapshot.first_name,
            last_name: snapshot.last_name,
            birth_date: snapshot.birth_date,
            license_number: snapshot.license_number,
            license_types: snapshot
                .license_types
                .iter()
                .map(|code| normalize_license(code))
                .collect(),
            license_date: snapshot.license_date,
            email: snapshot.email,
            phone: snapshot.phone,
            address: snapshot.address,
            rental_history: snapshot.rental_history,
            active_rentals: snapshot.active_rentals,
            created_at: snapshot
                .created_at
                .unwrap_or_else(|| Local::now().naive_local()),
            blocked: snapshot.is_blocked,
            blocked_reason: snapshot.blocked_reason,
        })
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_on(Local::now().date_naive()))
    }
}

/// Plain-data form of a [`Customer`] for display and persistence layers
///
/// The fields after `created_at` are derived and ignored when rebuilding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub license_number: String,
    pub license_types: Vec<String>,
    pub license_date: NaiveDate,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub rental_history: Vec<RentalId>,
    #[serde(default)]
    pub active_rentals: Vec<RentalId>,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub blocked_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,

    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub years_of_license: i32,
    #[serde(default)]
    pub total_rentals: usize,
    #[serde(default)]
    pub active_rental_count: usize,
    #[serde(default)]
    pub is_loyal: bool,
    #[serde(default)]
    pub loyalty_discount: f64,
}
