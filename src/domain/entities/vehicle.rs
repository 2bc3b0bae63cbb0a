//! Vehicle entity - one rentable unit of the fleet
//!
//! A vehicle carries the common fields every variant shares (identity,
//! pricing, odometer, workshop log) plus a [`VehicleKind`] payload. It owns
//! its state machine:
//!
//! ```text
//! Available --rent--> Rented --return--> Available
//!     |                                      ^
//!     +--send_to_maintenance--> Maintenance -+ complete_maintenance
//! ```
//!
//! Illegal transitions return `false` and leave the vehicle untouched.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::policies::vehicle_policy;
use crate::domain::value_objects::{
    MaintenanceRecord, VehicleCategory, VehicleId, VehicleKind, VehicleState,
};
use crate::error::{RentalError, RentalResult};

/// Default mileage between two maintenance visits
pub const DEFAULT_MAINTENANCE_KM: f64 = 10_000.0;

/// A vehicle of the fleet
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: VehicleId,
    brand: String,
    model: String,
    category: VehicleCategory,
    /// Never negative
    daily_rate: f64,
    state: VehicleState,
    year: i32,
    license_plate: String,
    /// Never decreases
    mileage: f64,
    maintenance_history: Vec<MaintenanceRecord>,
    last_maintenance_date: Option<NaiveDate>,
    kind: VehicleKind,
}

impl Vehicle {
    /// Create a new available vehicle with a generated id, no mileage and a
    /// zero daily rate
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        category: VehicleCategory,
        year: i32,
        license_plate: impl Into<String>,
        kind: impl Into<VehicleKind>,
    ) -> Self {
        Self {
            id: VehicleId::generate(),
            brand: brand.into(),
            model: model.into(),
            category,
            daily_rate: 0.0,
            state: VehicleState::Available,
            year,
            license_plate: license_plate.into(),
            mileage: 0.0,
            maintenance_history: Vec::new(),
            last_maintenance_date: None,
            kind: kind.into(),
        }
    }

    /// Builder: use an existing id
    pub fn with_id(mut self, id: impl Into<VehicleId>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: set the daily rate
    pub fn with_daily_rate(mut self, rate: f64) -> RentalResult<Self> {
        self.set_daily_rate(rate)?;
        Ok(self)
    }

    /// Builder: set the initial odometer reading
    pub fn with_mileage(mut self, mileage: f64) -> RentalResult<Self> {
        check_mileage(mileage)?;
        self.mileage = mileage;
        Ok(self)
    }

    // --- Getters ---

    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn daily_rate(&self) -> f64 {
        self.daily_rate
    }

    pub fn state(&self) -> VehicleState {
        self.state
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    /// Workshop log, oldest first
    pub fn maintenance_history(&self) -> &[MaintenanceRecord] {
        &self.maintenance_history
    }

    pub fn last_maintenance_date(&self) -> Option<NaiveDate> {
        self.last_maintenance_date
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    // --- Validated updates ---

    /// Change the daily rate. Negative and non-finite rates are rejected.
    pub fn set_daily_rate(&mut self, rate: f64) -> RentalResult<()> {
        check_daily_rate(rate)?;
        self.daily_rate = rate;
        Ok(())
    }

    /// Record a new odometer reading. Readings lower than the current one
    /// are rejected and leave the vehicle unchanged.
    pub fn record_mileage(&mut self, mileage: f64) -> RentalResult<()> {
        check_mileage(mileage)?;
        if mileage < self.mileage {
            return Err(RentalError::MileageDecrease {
                current: self.mileage,
                requested: mileage,
            });
        }
        self.mileage = mileage;
        Ok(())
    }

    // --- State machine ---

    pub fn is_available(&self) -> bool {
        self.state.is_available()
    }

    /// `Available → Rented`
    pub fn rent(&mut self) -> bool {
        if !self.is_available() {
            log::debug!("vehicle {} not rented: {}", self.id, self.state);
            return false;
        }
        self.state = VehicleState::Rented;
        log::debug!("vehicle {} rented", self.id);
        true
    }

    /// `Rented → Available`, optionally recording the odometer at return
    ///
    /// Returns `Ok(false)` if the vehicle was not rented. A mileage lower than
    /// the current one is an error; the vehicle then stays rented.
    pub fn return_vehicle(&mut self, new_mileage: Option<f64>) -> RentalResult<bool> {
        if !self.state.is_rented() {
            log::debug!("vehicle {} not returned: {}", self.id, self.state);
            return Ok(false);
        }
        if let Some(mileage) = new_mileage {
            self.record_mileage(mileage)?;
        }
        self.state = VehicleState::Available;
        log::debug!("vehicle {} returned at {} km", self.id, self.mileage);
        Ok(true)
    }

    /// Any state except `Rented` → `Maintenance`, logged with the current time
    pub fn send_to_maintenance(&mut self, description: impl Into<String>) -> bool {
        self.send_to_maintenance_at(description, Local::now().naive_local())
    }

    /// Same as [`send_to_maintenance`](Self::send_to_maintenance) with an explicit timestamp
    pub fn send_to_maintenance_at(
        &mut self,
        description: impl Into<String>,
        at: NaiveDateTime,
    ) -> bool {
        if self.state.is_rented() {
            log::debug!("vehicle {} is rented, cannot enter maintenance", self.id);
            return false;
        }
        self.state = VehicleState::Maintenance;
        self.maintenance_history
            .push(MaintenanceRecord::started(at, description, self.mileage));
        log::debug!("vehicle {} sent to maintenance", self.id);
        true
    }

    /// `Maintenance → Available`, logged with the current time
    pub fn complete_maintenance(&mut self, description: impl Into<String>, cost: f64) -> bool {
        self.complete_maintenance_at(description, cost, Local::now().naive_local())
    }

    /// Same as [`complete_maintenance`](Self::complete_maintenance) with an explicit timestamp
    pub fn complete_maintenance_at(
        &mut self,
        description: impl Into<String>,
        cost: f64,
        at: NaiveDateTime,
    ) -> bool {
        if self.state != VehicleState::Maintenance {
            log::debug!("vehicle {} not in maintenance: {}", self.id, self.state);
            return false;
        }
        self.state = VehicleState::Available;
        self.last_maintenance_date = Some(at.date());
        self.maintenance_history
            .push(MaintenanceRecord::finished(at, description, cost, self.mileage));
        log::debug!("vehicle {} back from maintenance", self.id);
        true
    }

    /// Administrative withdrawal: any state except `Rented` → `OutOfService`
    pub fn take_out_of_service(&mut self) -> bool {
        if self.state.is_rented() {
            return false;
        }
        self.state = VehicleState::OutOfService;
        log::debug!("vehicle {} taken out of service", self.id);
        true
    }

    /// True once `km_threshold` km have been driven since the last finished
    /// maintenance (or in total, if the vehicle was never serviced)
    pub fn needs_maintenance(&self, km_threshold: f64) -> bool {
        let serviced_at = self
            .maintenance_history
            .iter()
            .rev()
            .find(|record| record.is_finished())
            .map_or(0.0, |record| record.mileage);

        self.mileage - serviced_at >= km_threshold
    }

    // --- Policy ---

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub fn minimum_driver_age(&self) -> u32 {
        vehicle_policy::minimum_driver_age(&self.kind, self.category)
    }

    pub fn required_license(&self) -> &'static str {
        vehicle_policy::required_license(&self.kind)
    }

    /// Price of renting this vehicle for `days` days
    pub fn calculate_rental_cost(&self, days: i64) -> RentalResult<f64> {
        vehicle_policy::rental_cost(&self.kind, self.daily_rate, days)
    }

    // --- Snapshots ---

    /// Plain-data view of the vehicle, including derived policy values
    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot {
            id: self.id.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            category: self.category,
            daily_rate: self.daily_rate,
            state: self.state,
            year: self.year,
            license_plate: self.license_plate.clone(),
            mileage: self.mileage,
            minimum_age: self.minimum_driver_age(),
            required_license: self.required_license().to_string(),
            kind: self.kind,
            maintenance_history: self.maintenance_history.clone(),
            last_maintenance_date: self.last_maintenance_date,
        }
    }

    /// Rebuild a vehicle from a snapshot. Derived fields are ignored and
    /// recomputed; rate and mileage are validated.
    pub fn from_snapshot(snapshot: VehicleSnapshot) -> RentalResult<Self> {
        let invalid = |message: String| RentalError::InvalidSnapshot {
            entity: "vehicle",
            message,
        };

        check_daily_rate(snapshot.daily_rate).map_err(|e| invalid(e.to_string()))?;
        check_mileage(snapshot.mileage).map_err(|e| invalid(e.to_string()))?;
        if let Some(record) = snapshot
            .maintenance_history
            .iter()
            .find(|record| record.mileage > snapshot.mileage)
        {
            return Err(invalid(format!(
                "maintenance record at {} km is past the current mileage {}",
                record.mileage, snapshot.mileage
            )));
        }

        Ok(Self {
            id: snapshot.id,
            brand: snapshot.brand,
            model: snapshot.model,
            category: snapshot.category,
            daily_rate: snapshot.daily_rate,
            state: snapshot.state,
            year: snapshot.year,
            license_plate: snapshot.license_plate,
            mileage: snapshot.mileage,
            maintenance_history: snapshot.maintenance_history,
            last_maintenance_date: snapshot.last_maintenance_date,
            kind: snapshot.kind,
        })
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} ({}) - {}",
            self.type_name(),
            self.brand,
            self.model,
            self.year,
            self.license_plate
        )
    }
}

fn check_daily_rate(rate: f64) -> RentalResult<()> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(())
    } else {
        Err(RentalError::NegativeDailyRate { rate })
    }
}

fn check_mileage(mileage: f64) -> RentalResult<()> {
    if mileage.is_finite() && mileage >= 0.0 {
        Ok(())
    } else {
        Err(RentalError::NegativeMileage { mileage })
    }
}

/// Plain-data form of a [`Vehicle`] for display and persistence layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub category: VehicleCategory,
    pub daily_rate: f64,
    #[serde(default)]
    pub state: VehicleState,
    pub year: i32,
    pub license_plate: String,
    #[serde(default)]
    pub mileage: f64,
    #[serde(default)]
    pub minimum_age: u32,
    #[serde(default)]
    pub required_license: String,
    #[serde(flatten)]
    pub kind: VehicleKind,
    #[serde(default)]
    pub maintenance_history: Vec<MaintenanceRecord>,
    #[serde(default)]
    pub last_maintenance_date: Option<NaiveDate>,
}
