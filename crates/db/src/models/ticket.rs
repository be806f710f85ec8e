//! Ticket model and DTOs. A ticket links one passenger to one flight.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Ticket {
    pub id: DbId,
    pub passenger_id: DbId,
    pub flight_id: DbId,
    pub seat_number: Option<String>,
    pub ticket_price: Option<f64>,
    pub baggage_included: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTicket {
    pub passenger_id: DbId,
    pub flight_id: DbId,
    pub seat_number: Option<String>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub ticket_price: Option<f64>,
    #[serde(default)]
    pub baggage_included: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTicket {
    pub passenger_id: Option<DbId>,
    pub flight_id: Option<DbId>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub seat_number: Option<Option<String>>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    #[serde(default, deserialize_with = "super::nullable")]
    pub ticket_price: Option<Option<f64>>,
    pub baggage_included: Option<bool>,
}
