//! Rental desk service
//!
//! Runs the rental sequence over borrowed entities:
//!
//! ```text
//! open:  vehicle requirements -> customer eligibility -> vehicle.rent() -> customer.add_rental()
//! close: vehicle.return_vehicle() -> customer.complete_rental()
//! ```
//!
//! The desk owns no registry. Callers fetch the customer and vehicle from
//! their stores and must hold exclusive access to both for the duration of
//! a call.

use chrono::NaiveDate;

use crate::config::AgencyConfig;
use crate::domain::entities::{Customer, CustomerSnapshot, Rental, RentalQuote, Vehicle};
use crate::domain::policies::vehicle_policy;
use crate::domain::ports::Clock;
use crate::domain::services::fleet_queries;
use crate::domain::value_objects::Eligibility;
use crate::error::{RentalError, RentalResult};

/// Coordinates customers, vehicles and rentals
#[derive(Debug, Clone)]
pub struct RentalDesk<C: Clock> {
    config: AgencyConfig,
    clock: C,
}

impl<C: Clock> RentalDesk<C> {
    pub fn new(config: AgencyConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &AgencyConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Eligibility of `customer` for `vehicle` as of today
    pub fn check(&self, customer: &Customer, vehicle: &Vehicle) -> Eligibility {
        customer.can_rent_vehicle_on(
            vehicle.required_license(),
            vehicle.minimum_driver_age(),
            self.today(),
        )
    }

    /// Price of renting `vehicle` to `customer` for `days` days
    pub fn quote(&self, customer: &Customer, vehicle: &Vehicle, days: i64) -> RentalResult<RentalQuote> {
        let base_cost = vehicle.calculate_rental_cost(days)?;
        let loyalty_discount = if self.config.pricing.apply_loyalty_discount {
            customer.loyalty_discount()
        } else {
            0.0
        };
        let days = vehicle_policy::rental_days(days)?;
        Ok(RentalQuote::new(days, base_cost, loyalty_discount))
    }

    /// Open a rental. Nothing is mutated unless every step succeeds.
    pub fn open(
        &self,
        customer: &mut Customer,
        vehicle: &mut Vehicle,
        start_date: NaiveDate,
        days: i64,
    ) -> RentalResult<Rental> {
        let rental = Rental::new(
            customer.id().clone(),
            vehicle.id().clone(),
            start_date,
            days,
        )?;

        if let Eligibility::Refused(refusal) = self.check(customer, vehicle) {
            log::info!(
                "customer {} refused for vehicle {}: {}",
                customer.id(),
                vehicle.id(),
                refusal
            );
            return Err(RentalError::NotEligible {
                customer: customer.id().clone(),
                refusal,
            });
        }

        if !vehicle.rent() {
            return Err(RentalError::VehicleUnavailable {
                vehicle: vehicle.id().clone(),
                state: vehicle.state(),
            });
        }
        customer.add_rental(rental.id().clone());

        log::info!(
            "rental {} opened: customer {} / vehicle {} for {} days from {}",
            rental.id(),
            rental.customer_id(),
            rental.vehicle_id(),
            rental.days(),
            rental.start_date()
        );
        Ok(rental)
    }

    /// Close a rental, recording the odometer reading at return
    pub fn close(
        &self,
        rental: &Rental,
        customer: &mut Customer,
        vehicle: &mut Vehicle,
        new_mileage: Option<f64>,
    ) -> RentalResult<()> {
        self.ensure_matches(rental, customer, vehicle)?;

        if !vehicle.return_vehicle(new_mileage)? {
            return Err(RentalError::VehicleUnavailable {
                vehicle: vehicle.id().clone(),
                state: vehicle.state(),
            });
        }
        customer.complete_rental(rental.id());

        log::info!("rental {} closed at {} km", rental.id(), vehicle.mileage());
        Ok(())
    }

    /// Cancel a rental before the vehicle was driven
    pub fn cancel(
        &self,
        rental: &Rental,
        customer: &mut Customer,
        vehicle: &mut Vehicle,
    ) -> RentalResult<()> {
        self.close(rental, customer, vehicle, None)?;
        log::info!("rental {} cancelled", rental.id());
        Ok(())
    }

    /// Customer snapshot using today's date and the configured loyalty threshold
    pub fn customer_snapshot(&self, customer: &Customer) -> CustomerSnapshot {
        customer.snapshot_with(self.today(), self.config.loyalty.min_rentals)
    }

    /// Vehicles past the configured maintenance threshold
    pub fn vehicles_needing_maintenance<'a, I>(&self, vehicles: I) -> Vec<&'a Vehicle>
    where
        I: IntoIterator<Item = &'a Vehicle>,
    {
        fleet_queries::needing_maintenance(vehicles, self.config.maintenance.km_threshold).collect()
    }

    fn ensure_matches(
        &self,
        rental: &Rental,
        customer: &Customer,
        vehicle: &Vehicle,
    ) -> RentalResult<()> {
        let mismatch = |message: String| RentalError::RentalMismatch {
            rental: rental.id().clone(),
            message,
        };

        if rental.customer_id() != customer.id() {
            return Err(mismatch(format!(
                "belongs to customer {}, not {}",
                rental.customer_id(),
                customer.id()
            )));
        }
        if rental.vehicle_id() != vehicle.id() {
            return Err(mismatch(format!(
                "belongs to vehicle {}, not {}",
                rental.vehicle_id(),
                vehicle.id()
            )));
        }
        if !customer.has_active_rental(rental.id()) {
            return Err(mismatch("is not active".to_string()));
        }
        Ok(())
    }
}
