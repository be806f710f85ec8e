//! Read models for the operations dashboard.

use aerodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::checkin::Checkin;
use super::flight::Flight;
use super::incident::Incident;
use super::maintenance::Maintenance;

/// Row counts for the headline tiles.
#[derive(Debug, Clone, Default, FromRow, Serialize, Deserialize)]
pub struct EntityCounts {
    pub flights: i64,
    pub airlines: i64,
    pub airports: i64,
    pub passengers: i64,
    pub personnel: i64,
    pub incidents: i64,
    pub maintenance: i64,
    pub tickets: i64,
    pub crews: i64,
    pub checkins: i64,
}

/// A `(label, count)` bucket, e.g. flights per status.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: i64,
}

/// A departure airport ranked by the number of tickets sold on its flights.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AirportTraffic {
    pub airport_id: DbId,
    pub name: String,
    pub iata_code: Option<String>,
    pub ticket_count: i64,
}

/// Flights departing from and arriving at the airports of one country.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct CountryTraffic {
    pub country: String,
    pub departures: i64,
    pub arrivals: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub counts: EntityCounts,
    pub flights_by_status: Vec<LabelCount>,
    pub incidents_by_severity: Vec<LabelCount>,
    pub upcoming_flights: Vec<Flight>,
    pub recent_incidents: Vec<Incident>,
    pub open_maintenance: Vec<Maintenance>,
    pub recent_checkins: Vec<Checkin>,
    pub top_departure_airports: Vec<AirportTraffic>,
    /// Every country that has an airport, including those without flights.
    pub flights_by_country: Vec<CountryTraffic>,
    pub generated_at: Timestamp,
}
