//! Airport model and DTOs.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Airport {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub iata_code: Option<String>,
    pub icao_code: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirport {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: String,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub city: String,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub country: String,
    #[validate(length(min = 3, max = 3, message = "must be 3 characters"))]
    pub iata_code: Option<String>,
    #[validate(length(min = 4, max = 4, message = "must be 4 characters"))]
    pub icao_code: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAirport {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub city: Option<String>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub country: Option<String>,
    #[validate(length(min = 3, max = 3, message = "must be 3 characters"))]
    #[serde(default, deserialize_with = "super::nullable")]
    pub iata_code: Option<Option<String>>,
    #[validate(length(min = 4, max = 4, message = "must be 4 characters"))]
    #[serde(default, deserialize_with = "super::nullable")]
    pub icao_code: Option<Option<String>>,
}
