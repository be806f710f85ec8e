//! Gate model and DTOs. A gate belongs to one terminal.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Gate {
    pub id: DbId,
    pub terminal_id: DbId,
    pub gate_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGate {
    pub terminal_id: DbId,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub gate_number: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGate {
    pub terminal_id: Option<DbId>,
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub gate_number: Option<String>,
}
