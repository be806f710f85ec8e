//! Terminal model and DTOs. A terminal belongs to one airport.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Terminal {
    pub id: DbId,
    pub airport_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTerminal {
    pub airport_id: DbId,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTerminal {
    pub airport_id: Option<DbId>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub name: Option<String>,
}
