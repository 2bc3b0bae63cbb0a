//! Eligibility value object - outcome of a customer/vehicle rental check
//!
//! A refusal is ordinary control flow, not an error: it carries the reason
//! that a desk clerk would read back to the customer.

use serde::{Deserialize, Serialize};

/// Minimum full years a license must have been held
pub const MIN_YEARS_LICENSED: i32 = 1;

/// Why a customer may not rent a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "refusal", rename_all = "snake_case")]
pub enum Refusal {
    Blocked { reason: Option<String> },
    TooYoung { age: i32, minimum: u32 },
    MissingLicense { required: String },
    LicenseTooRecent { years: i32 },
}

impl std::fmt::Display for Refusal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Refusal::Blocked { reason: Some(reason) } => write!(f, "customer blocked: {}", reason),
            Refusal::Blocked { reason: None } => write!(f, "customer blocked"),
            Refusal::TooYoung { age, minimum } => write!(
                f,
                "insufficient age ({} years, minimum required: {} years)",
                age, minimum
            ),
            Refusal::MissingLicense { required } => {
                write!(f, "license {} required, not held by the customer", required)
            }
            Refusal::LicenseTooRecent { .. } => write!(
                f,
                "license must be held for at least {} year",
                MIN_YEARS_LICENSED
            ),
        }
    }
}

/// Pass/fail result of an eligibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Refused(Refusal),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    /// The refusal, if any
    pub fn refusal(&self) -> Option<&Refusal> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::Refused(refusal) => Some(refusal),
        }
    }

    /// Human-readable reason (`"OK"` when eligible)
    pub fn reason(&self) -> String {
        match self {
            Eligibility::Eligible => "OK".to_string(),
            Eligibility::Refused(refusal) => refusal.to_string(),
        }
    }

    /// Convert into a `Result`, keeping the refusal as the error value
    pub fn into_result(self) -> Result<(), Refusal> {
        match self {
            Eligibility::Eligible => Ok(()),
            Eligibility::Refused(refusal) => Err(refusal),
        }
    }
}
