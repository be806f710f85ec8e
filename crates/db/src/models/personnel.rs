//! Personnel model and DTOs.

use aerodesk_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Personnel {
    pub id: DbId,
    pub name: String,
    pub position_id: Option<DbId>,
    pub license_number: Option<String>,
    pub hired_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePersonnel {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: String,
    pub position_id: Option<DbId>,
    pub license_number: Option<String>,
    pub hired_date: Option<Date>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePersonnel {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub position_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub license_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub hired_date: Option<Option<Date>>,
}
