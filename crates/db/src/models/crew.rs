//! Crew and crew-member models and DTOs.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Crew {
    pub id: DbId,
    pub flight_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: DbId,
    pub crew_id: DbId,
    pub personnel_id: DbId,
    pub role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A crew together with its members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewWithMembers {
    #[serde(flatten)]
    pub crew: Crew,
    pub members: Vec<CrewMember>,
}

/// One `(personnel, role)` assignment in a crew write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCrewMember {
    pub personnel_id: DbId,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCrew {
    pub flight_id: DbId,
    #[validate(length(min = 1, message = "a crew must have at least one member"))]
    pub members: Vec<NewCrewMember>,
}

/// Update DTO. Omitting `members` keeps the stored members; supplying it
/// replaces them.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCrew {
    pub flight_id: Option<DbId>,
    #[validate(length(min = 1, message = "a crew must have at least one member"))]
    pub members: Option<Vec<NewCrewMember>>,
}

pub fn personnel_ids(members: &[NewCrewMember]) -> Vec<DbId> {
    members.iter().map(|m| m.personnel_id).collect()
}
