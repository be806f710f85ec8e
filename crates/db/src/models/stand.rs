//! Aircraft stand model and DTOs. A stand belongs to one airport.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Stand {
    pub id: DbId,
    pub airport_id: DbId,
    pub stand_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStand {
    pub airport_id: DbId,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub stand_number: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStand {
    pub airport_id: Option<DbId>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub stand_number: Option<String>,
}
