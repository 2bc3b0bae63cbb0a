//! Identifier value objects - opaque ids for vehicles, customers and rentals
//!
//! Generated ids are the first eight hex digits of a random v4 UUID,
//! uppercased (`"3F9A01BC"`). Existing records keep whatever id they were
//! stored with.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const GENERATED_ID_LEN: usize = 8;

fn generate() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(GENERATED_ID_LEN);
    id.to_uppercase()
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random id
            pub fn generate() -> Self {
                Self(generate())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identity of a vehicle in the fleet
    VehicleId
);
string_id!(
    /// Identity of a customer
    CustomerId
);
string_id!(
    /// Identity of a rental contract
    RentalId
);
