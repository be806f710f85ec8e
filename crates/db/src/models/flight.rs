//! Flight model and DTOs.

use aerodesk_core::flight::{FlightSchedule, FlightStatus};
use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Flight {
    pub id: DbId,
    pub flight_number: String,
    pub aircraft_id: Option<DbId>,
    pub airline_id: Option<DbId>,
    pub gate_id: Option<DbId>,
    pub stand_id: Option<DbId>,
    pub departure_airport_id: DbId,
    pub arrival_airport_id: DbId,
    pub scheduled_departure: Timestamp,
    pub scheduled_arrival: Timestamp,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Flight {
    pub fn schedule(&self) -> FlightSchedule<'_> {
        FlightSchedule {
            flight_number: &self.flight_number,
            departure_airport_id: self.departure_airport_id,
            arrival_airport_id: self.arrival_airport_id,
            scheduled_departure: self.scheduled_departure,
            scheduled_arrival: self.scheduled_arrival,
        }
    }

    /// Overlay a patch on the stored row, producing the record as it would
    /// look after the update.
    pub fn merged(&self, patch: &UpdateFlight) -> Flight {
        Flight {
            flight_number: patch
                .flight_number
                .clone()
                .unwrap_or_else(|| self.flight_number.clone()),
            aircraft_id: patch.aircraft_id.unwrap_or(self.aircraft_id),
            airline_id: patch.airline_id.unwrap_or(self.airline_id),
            gate_id: patch.gate_id.unwrap_or(self.gate_id),
            stand_id: patch.stand_id.unwrap_or(self.stand_id),
            departure_airport_id: patch
                .departure_airport_id
                .unwrap_or(self.departure_airport_id),
            arrival_airport_id: patch.arrival_airport_id.unwrap_or(self.arrival_airport_id),
            scheduled_departure: patch
                .scheduled_departure
                .unwrap_or(self.scheduled_departure),
            scheduled_arrival: patch.scheduled_arrival.unwrap_or(self.scheduled_arrival),
            status: patch
                .status
                .map(|s| s.as_str().to_string())
                .unwrap_or_else(|| self.status.clone()),
            ..self.clone()
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFlight {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub flight_number: String,
    pub aircraft_id: Option<DbId>,
    pub airline_id: Option<DbId>,
    pub gate_id: Option<DbId>,
    pub stand_id: Option<DbId>,
    pub departure_airport_id: DbId,
    pub arrival_airport_id: DbId,
    pub scheduled_departure: Timestamp,
    pub scheduled_arrival: Timestamp,
    #[serde(default)]
    pub status: FlightStatus,
}

impl CreateFlight {
    pub fn schedule(&self) -> FlightSchedule<'_> {
        FlightSchedule {
            flight_number: &self.flight_number,
            departure_airport_id: self.departure_airport_id,
            arrival_airport_id: self.arrival_airport_id,
            scheduled_departure: self.scheduled_departure,
            scheduled_arrival: self.scheduled_arrival,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateFlight {
    #[validate(custom(function = "aerodesk_core::validation::not_blank"))]
    pub flight_number: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub aircraft_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub airline_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub gate_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub stand_id: Option<Option<DbId>>,
    pub departure_airport_id: Option<DbId>,
    pub arrival_airport_id: Option<DbId>,
    pub scheduled_departure: Option<Timestamp>,
    pub scheduled_arrival: Option<Timestamp>,
    pub status: Option<FlightStatus>,
}
