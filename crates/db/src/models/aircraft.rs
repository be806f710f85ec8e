//! Aircraft model and DTOs.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: DbId,
    pub aircraft_type_id: Option<DbId>,
    pub tail_number: String,
    pub airline_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAircraft {
    pub aircraft_type_id: Option<DbId>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub tail_number: String,
    pub airline_id: Option<DbId>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAircraft {
    #[serde(default, deserialize_with = "super::nullable")]
    pub aircraft_type_id: Option<Option<DbId>>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub tail_number: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub airline_id: Option<Option<DbId>>,
}
