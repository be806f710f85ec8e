//! Airline model and DTOs.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Airline {
    pub id: DbId,
    pub name: String,
    /// Always stored upper-case.
    pub iata_code: String,
    pub country: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirline {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: String,
    #[validate(length(min = 2, max = 3, message = "must be 2 or 3 characters"))]
    pub iata_code: String,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub country: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAirline {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 3, message = "must be 2 or 3 characters"))]
    pub iata_code: Option<String>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub country: Option<String>,
}
