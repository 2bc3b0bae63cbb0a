//! VehicleKind value object - the variant-specific part of a vehicle
//!
//! Every vehicle shares the same common fields; what makes a car a car is
//! carried here as a tagged payload. Policy lookups (minimum age, license,
//! surcharge) match on this tag in `domain::policies`.

use serde::{Deserialize, Serialize};

/// Fuel or energy source of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    Hybrid,
    Electric,
    Lpg,
}

/// Gearbox of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    #[default]
    Manual,
    Automatic,
}

/// Riding style of a motorcycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MotorcycleStyle {
    #[default]
    Standard,
    Sport,
    Touring,
    Cruiser,
    Scooter,
    OffRoad,
}

/// Car-specific attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSpec {
    pub doors: u8,
    pub seats: u8,
    #[serde(default)]
    pub fuel_type: FuelType,
    #[serde(default)]
    pub transmission: Transmission,
}

impl Default for CarSpec {
    fn default() -> Self {
        Self {
            doors: 5,
            seats: 5,
            fuel_type: FuelType::default(),
            transmission: Transmission::default(),
        }
    }
}

impl CarSpec {
    pub fn with_doors(mut self, doors: u8) -> Self {
        self.doors = doors;
        self
    }

    pub fn with_seats(mut self, seats: u8) -> Self {
        self.seats = seats;
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = fuel_type;
        self
    }

    pub fn with_transmission(mut self, transmission: Transmission) -> Self {
        self.transmission = transmission;
        self
    }
}

/// Truck-specific attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruckSpec {
    /// Cargo volume in cubic metres
    pub cargo_capacity: f64,
    /// Maximum authorised weight in kilograms
    pub max_weight: f64,
    #[serde(default)]
    pub has_tail_lift: bool,
}

impl TruckSpec {
    pub fn new(cargo_capacity: f64, max_weight: f64) -> Self {
        Self {
            cargo_capacity,
            max_weight,
            has_tail_lift: false,
        }
    }

    pub fn with_tail_lift(mut self, has_tail_lift: bool) -> Self {
        self.has_tail_lift = has_tail_lift;
        self
    }
}

/// Motorcycle-specific attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotorcycleSpec {
    /// Engine displacement in cc
    pub engine_size: u32,
    #[serde(default)]
    pub style: MotorcycleStyle,
}

impl MotorcycleSpec {
    pub fn new(engine_size: u32) -> Self {
        Self {
            engine_size,
            style: MotorcycleStyle::default(),
        }
    }

    pub fn with_style(mut self, style: MotorcycleStyle) -> Self {
        self.style = style;
        self
    }
}

/// Variant tag plus variant-specific payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VehicleKind {
    Car(CarSpec),
    Truck(TruckSpec),
    Motorcycle(MotorcycleSpec),
}

impl VehicleKind {
    /// Human-readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            VehicleKind::Car(_) => "Car",
            VehicleKind::Truck(_) => "Truck",
            VehicleKind::Motorcycle(_) => "Motorcycle",
        }
    }

    pub fn as_car(&self) -> Option<&CarSpec> {
        match self {
            VehicleKind::Car(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_truck(&self) -> Option<&TruckSpec> {
        match self {
            VehicleKind::Truck(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_motorcycle(&self) -> Option<&MotorcycleSpec> {
        match self {
            VehicleKind::Motorcycle(spec) => Some(spec),
            _ => None,
        }
    }
}

impl From<CarSpec> for VehicleKind {
    fn from(spec: CarSpec) -> Self {
        VehicleKind::Car(spec)
    }
}

impl From<TruckSpec> for VehicleKind {
    fn from(spec: TruckSpec) -> Self {
        VehicleKind::Truck(spec)
    }
}

impl From<MotorcycleSpec> for VehicleKind {
    fn from(spec: MotorcycleSpec) -> Self {
        VehicleKind::Motorcycle(spec)
    }
}
