//! Domain Layer
//!
//! The vehicle-rental core - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Entities with identity and lifecycle (Vehicle, Customer, Rental)
//! - `value_objects/` - Immutable value types (ids, states, categories, eligibility)
//! - `policies/` - Business rules (per-variant requirements, pricing, loyalty, age)
//! - `services/` - Domain services (RentalDesk, fleet queries)
//! - `ports/` - Interface definitions for the outside world (Clock)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches storage or a UI
//! 2. **Deterministic** - Every date-dependent rule has a variant taking the date
//! 3. **Single writer** - Entities do no locking; callers serialize access per aggregate

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
