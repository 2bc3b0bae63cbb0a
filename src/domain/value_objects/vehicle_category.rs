//! VehicleCategory value object - commercial class of a vehicle

use serde::{Deserialize, Serialize};

/// Commercial category of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Economy,
    #[default]
    Standard,
    Premium,
    Luxury,
    Utility,
    Sport,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 6] = [
        VehicleCategory::Economy,
        VehicleCategory::Standard,
        VehicleCategory::Premium,
        VehicleCategory::Luxury,
        VehicleCategory::Utility,
        VehicleCategory::Sport,
    ];

    /// Categories that call for the most experienced drivers
    pub fn is_high_performance(&self) -> bool {
        matches!(self, VehicleCategory::Luxury | VehicleCategory::Sport)
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VehicleCategory::Economy => "economy",
            VehicleCategory::Standard => "standard",
            VehicleCategory::Premium => "premium",
            VehicleCategory::Luxury => "luxury",
            VehicleCategory::Utility => "utility",
            VehicleCategory::Sport => "sport",
        };
        f.write_str(name)
    }
}
