//! Incident model and DTOs.

use aerodesk_core::incident::Severity;
use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Incident {
    pub id: DbId,
    pub flight_id: Option<DbId>,
    pub personnel_id: Option<DbId>,
    pub incident_time: Timestamp,
    pub description: String,
    pub severity: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateIncident {
    pub flight_id: Option<DbId>,
    pub personnel_id: Option<DbId>,
    pub incident_time: Timestamp,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateIncident {
    #[serde(default, deserialize_with = "super::nullable")]
    pub flight_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub personnel_id: Option<Option<DbId>>,
    pub incident_time: Option<Timestamp>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub description: Option<String>,
    pub severity: Option<Severity>,
}
