//! MaintenanceRecord value object - one entry of a vehicle's workshop log

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Whether the record opens or closes a maintenance period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceEvent {
    Started,
    Finished,
}

/// Append-only maintenance log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub at: NaiveDateTime,
    pub event: MaintenanceEvent,
    pub description: String,
    /// Odometer reading when the record was written
    pub mileage: f64,
    /// Only set on `Finished` records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl MaintenanceRecord {
    pub fn started(at: NaiveDateTime, description: impl Into<String>, mileage: f64) -> Self {
        Self {
            at,
            event: MaintenanceEvent::Started,
            description: description.into(),
            mileage,
            cost: None,
        }
    }

    pub fn finished(
        at: NaiveDateTime,
        description: impl Into<String>,
        cost: f64,
        mileage: f64,
    ) -> Self {
        Self {
            at,
            event: MaintenanceEvent::Finished,
            description: description.into(),
            mileage,
            cost: Some(cost),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.event == MaintenanceEvent::Finished
    }
}
