//! Check-in and baggage models and DTOs.
//!
//! A check-in owns its baggage rows. Writes always carry the full baggage
//! list, which replaces whatever was stored before.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Checkin {
    pub id: DbId,
    pub ticket_id: DbId,
    pub checkin_time: Timestamp,
    pub baggage_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Baggage {
    pub id: DbId,
    pub checkin_id: DbId,
    pub weight_kg: f64,
    pub label_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A check-in together with the baggage it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinWithBaggage {
    #[serde(flatten)]
    pub checkin: Checkin,
    pub baggage: Vec<Baggage>,
}

/// One bag in a check-in write.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBaggage {
    pub weight_kg: f64,
    pub label_number: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCheckin {
    pub ticket_id: DbId,
    pub baggage_count: i32,
    #[serde(default, alias = "baggages")]
    pub baggage: Vec<NewBaggage>,
}

/// Update DTO. Omitting `baggage` keeps the stored bags; supplying it
/// (even empty) replaces them.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCheckin {
    pub ticket_id: Option<DbId>,
    pub baggage_count: Option<i32>,
    #[serde(default, alias = "baggages")]
    pub baggage: Option<Vec<NewBaggage>>,
}
