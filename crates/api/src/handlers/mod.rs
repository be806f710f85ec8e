//! HTTP handlers, one module per resource.

use aerodesk_core::error::CoreError;
use aerodesk_core::types::DbId;

use crate::error::{AppError, AppResult};

pub mod aircraft;
pub mod aircraft_type;
pub mod airline;
pub mod airport;
pub mod auth;
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

/// Reject a request body that points at a row which does not exist.
pub(crate) fn ensure_reference(exists: bool, entity: &str, id: DbId) -> AppResult<()> {
    if exists {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::missing_reference(entity, id)))
    }
}

/// Reject a write that would take a unique value already held by another
/// row. `current` is the row being updated, `None` on create.
pub(crate) fn ensure_unique(
    holder: Option<DbId>,
    current: Option<DbId>,
    message: impl FnOnce() -> String,
) -> AppResult<()> {
    match holder {
        Some(existing) if Some(existing) != current => {
            Err(AppError::Core(CoreError::Conflict(message())))
        }
        _ => Ok(()),
    }
}
