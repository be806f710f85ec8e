//! Row models and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! Nullable columns use `Option<Option<T>>` in update DTOs: an absent key
//! keeps the stored value, an explicit `null` clears it.

use serde::{Deserialize, Deserializer};

pub mod aircraft;
pub mod aircraft_type;
pub mod airline;
pub mod airport;
pub mod checkin;
pub mod crew;
pub mod dashboard;
pub mod flight;
pub mod gate;
pub mod incident;
pub mod maintenance;
pub mod passenger;
pub mod personnel;
pub mod stand;
pub mod terminal;
pub mod ticket;
pub mod user;

/// Deserializer for clearable patch fields. Pair with `#[serde(default)]` so
/// an absent key stays `None` while `null` becomes `Some(None)`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
