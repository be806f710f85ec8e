//! Maintenance record model and DTOs.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Maintenance {
    pub id: DbId,
    pub aircraft_id: DbId,
    pub personnel_id: DbId,
    pub start_time: Timestamp,
    /// `None` while the aircraft is still in maintenance.
    pub end_time: Option<Timestamp>,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenance {
    pub aircraft_id: DbId,
    pub personnel_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenance {
    pub aircraft_id: Option<DbId>,
    pub personnel_id: Option<DbId>,
    pub start_time: Option<Timestamp>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub end_time: Option<Option<Timestamp>>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub description: Option<String>,
}
