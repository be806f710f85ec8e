//! Flight status values and flight consistency rules.
//!
//! A flight is consistent when its two airports differ and its scheduled
//! arrival is strictly after its scheduled departure. Flight numbers are
//! unique per departure day, where a day is the half-open UTC window
//! `[00:00, next 00:00)` containing the departure instant.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

pub const STATUS_SCHEDULED: &str = "Scheduled";
pub const STATUS_DELAYED: &str = "Delayed";
pub const STATUS_CANCELLED: &str = "Cancelled";
pub const STATUS_COMPLETED: &str = "Completed";

/// Operator-set flight status. No transitions are automated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightStatus {
    #[default]
    Scheduled,
    Delayed,
    Cancelled,
    Completed,
}

impl FlightStatus {
    pub const ALL: [FlightStatus; 4] = [
        FlightStatus::Scheduled,
        FlightStatus::Delayed,
        FlightStatus::Cancelled,
        FlightStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FlightStatus::Scheduled => STATUS_SCHEDULED,
            FlightStatus::Delayed => STATUS_DELAYED,
            FlightStatus::Cancelled => STATUS_CANCELLED,
            FlightStatus::Completed => STATUS_COMPLETED,
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlightStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlightStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid flight status '{s}'. Must be one of: {STATUS_SCHEDULED}, \
                     {STATUS_DELAYED}, {STATUS_CANCELLED}, {STATUS_COMPLETED}"
                ))
            })
    }
}

/// The fields that participate in flight consistency checks.
///
/// Built from the merged record on update (stored values overlaid with the
/// patch) so partial updates are held to the same rules as creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSchedule<'a> {
    pub flight_number: &'a str,
    pub departure_airport_id: DbId,
    pub arrival_airport_id: DbId,
    pub scheduled_departure: Timestamp,
    pub scheduled_arrival: Timestamp,
}

/// Validate the cross-field invariants of a flight.
pub fn validate_schedule(schedule: &FlightSchedule<'_>) -> Result<(), CoreError> {
    if schedule.flight_number.trim().is_empty() {
        return Err(CoreError::Validation("Flight number is required".into()));
    }
    if schedule.departure_airport_id == schedule.arrival_airport_id {
        return Err(CoreError::Validation(
            "Departure and arrival airports must be different".into(),
        ));
    }
    if schedule.scheduled_arrival <= schedule.scheduled_departure {
        return Err(CoreError::Validation(
            "Scheduled arrival must be later than scheduled departure".into(),
        ));
    }
    Ok(())
}

/// Half-open UTC window `[start, end)` covering the given calendar day.
pub fn day_window(date: NaiveDate) -> (Timestamp, Timestamp) {
    let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::default()));
    let next = date.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX);
    let end = Utc.from_utc_datetime(&next.and_time(NaiveTime::default()));
    (start, end)
}

/// The departure-day window used for flight-number uniqueness.
pub fn departure_day_window(departure: Timestamp) -> (Timestamp, Timestamp) {
    day_window(departure.date_naive())
}

/// Error returned when a flight number is already taken on a given day.
pub fn duplicate_flight_number(flight_number: &str, departure: Timestamp) -> CoreError {
    CoreError::Conflict(format!(
        "A flight with number {flight_number} already exists that day ({})",
        departure.date_naive()
    ))
}

/// Parsed filters for listing flights. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightFilter {
    /// Matches flights departing **or** arriving within this UTC day.
    pub date: Option<NaiveDate>,
    pub status: Option<FlightStatus>,
    pub airline_id: Option<DbId>,
}

impl FlightFilter {
    /// Build a filter from raw query-string values.
    ///
    /// Empty strings are treated as absent so that blank form fields do not
    /// turn into filters.
    pub fn parse(
        date: Option<&str>,
        status: Option<&str>,
        airline_id: Option<&str>,
    ) -> Result<Self, CoreError> {
        let date = non_empty(date)
            .map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| {
                    CoreError::Validation(format!("Invalid date '{d}'. Expected YYYY-MM-DD"))
                })
            })
            .transpose()?;

        let status = non_empty(status)
            .map(str::parse::<FlightStatus>)
            .transpose()?;

        let airline_id = non_empty(airline_id)
            .map(|a| {
                a.parse::<DbId>()
                    .map_err(|_| CoreError::Validation(format!("Invalid airline_id '{a}'")))
            })
            .transpose()?;

        Ok(Self {
            date,
            status,
            airline_id,
        })
    }

    /// The UTC window for the date filter, if any.
    pub fn window(&self) -> Option<(Timestamp, Timestamp)> {
        self.date.map(day_window)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
