//! Aircraft type model and DTOs.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AircraftType {
    pub id: DbId,
    pub model: String,
    pub manufacturer: String,
    pub seats: Option<i32>,
    pub max_range_km: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAircraftType {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub model: String,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub manufacturer: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub seats: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub max_range_km: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAircraftType {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub model: Option<String>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub manufacturer: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    #[serde(default, deserialize_with = "super::nullable")]
    pub seats: Option<Option<i32>>,
    #[validate(range(min = 0, message = "must not be negative"))]
    #[serde(default, deserialize_with = "super::nullable")]
    pub max_range_km: Option<Option<i32>>,
}
