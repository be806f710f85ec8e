//! Passenger model and DTOs.

use aerodesk_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Passenger {
    pub id: DbId,
    pub name: String,
    pub passport_number: String,
    pub nationality: Option<String>,
    pub birth_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePassenger {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: String,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub passport_number: String,
    pub nationality: Option<String>,
    pub birth_date: Option<Date>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePassenger {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub passport_number: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub nationality: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub birth_date: Option<Option<Date>>,
}
