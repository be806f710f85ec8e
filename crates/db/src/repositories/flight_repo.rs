//! Repository for the `flights` table.

use aerodesk_core::delete_guard::DeleteGuard;
use aerodesk_core::flight::{departure_day_window, FlightFilter};
use aerodesk_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use super::{count_referencing, delete_row, row_exists};
use crate::models::flight::{CreateFlight, Flight, UpdateFlight};

const COLUMNS: &str = "id, flight_number, aircraft_id, airline_id, gate_id, stand_id, \
                       departure_airport_id, arrival_airport_id, scheduled_departure, \
                       scheduled_arrival, status, created_at, updated_at";

/// Provides CRUD operations and filtered listing for flights.
pub struct FlightRepo;

impl FlightRepo {
    pub async fn create(pool: &PgPool, input: &CreateFlight) -> Result<Flight, sqlx::Error> {
        let query = format!(
            "INSERT INTO flights
                (flight_number, aircraft_id, airline_id, gate_id, stand_id,
                 departure_airport_id, arrival_airport_id,
                 scheduled_departure, scheduled_arrival, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flight>(&query)
            .bind(&input.flight_number)
            .bind(input.aircraft_id)
            .bind(input.airline_id)
            .bind(input.gate_id)
            .bind(input.stand_id)
            .bind(input.departure_airport_id)
            .bind(input.arrival_airport_id)
            .bind(input.scheduled_departure)
            .bind(input.scheduled_arrival)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Flight>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flights WHERE id = $1");
        sqlx::query_as::<_, Flight>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List flights matching every supplied filter, earliest departure first.
    ///
    /// The date filter matches flights that depart **or** arrive within the
    /// UTC day.
    pub async fn list(pool: &PgPool, filter: &FlightFilter) -> Result<Vec<Flight>, sqlx::Error> {
        let (day_start, day_end) = match filter.window() {
            Some((start, end)) => (Some(start), Some(end)),
            None => (None, None),
        };
        let query = format!(
            "SELECT {COLUMNS} FROM flights
             WHERE ($1::TIMESTAMPTZ IS NULL
                    OR (scheduled_departure >= $1 AND scheduled_departure < $2::TIMESTAMPTZ)
                    OR (scheduled_arrival >= $1 AND scheduled_arrival < $2::TIMESTAMPTZ))
               AND ($3::TEXT IS NULL OR status = $3)
               AND ($4::BIGINT IS NULL OR airline_id = $4)
             ORDER BY scheduled_departure ASC, id ASC"
        );
        sqlx::query_as::<_, Flight>(&query)
            .bind(day_start)
            .bind(day_end)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.airline_id)
            .fetch_all(pool)
            .await
    }

    /// Find another flight with the same number departing on the same UTC day.
    ///
    /// `exclude_id` skips the flight being updated.
    pub async fn find_same_day_duplicate(
        pool: &PgPool,
        flight_number: &str,
        departure: Timestamp,
        exclude_id: Option<DbId>,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let (day_start, day_end) = departure_day_window(departure);
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM flights
             WHERE flight_number = $1
               AND scheduled_departure >= $2
               AND scheduled_departure < $3
               AND ($4::BIGINT IS NULL OR id <> $4)
             LIMIT 1",
        )
        .bind(flight_number)
        .bind(day_start)
        .bind(day_end)
        .bind(exclude_id)
        .fetch_optional(pool)
        .await
    }

    /// Update a flight. Only supplied fields in `input` are applied; the
    /// optional links (aircraft, airline, gate, stand) are cleared by `null`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFlight,
    ) -> Result<Option<Flight>, sqlx::Error> {
        let query = format!(
            "UPDATE flights SET
                flight_number = COALESCE($2, flight_number),
                aircraft_id = CASE WHEN $3 THEN $4 ELSE aircraft_id END,
                airline_id = CASE WHEN $5 THEN $6 ELSE airline_id END,
                gate_id = CASE WHEN $7 THEN $8 ELSE gate_id END,
                stand_id = CASE WHEN $9 THEN $10 ELSE stand_id END,
                departure_airport_id = COALESCE($11, departure_airport_id),
                arrival_airport_id = COALESCE($12, arrival_airport_id),
                scheduled_departure = COALESCE($13, scheduled_departure),
                scheduled_arrival = COALESCE($14, scheduled_arrival),
                status = COALESCE($15, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flight>(&query)
            .bind(id)
            .bind(&input.flight_number)
            .bind(input.aircraft_id.is_some())
            .bind(input.aircraft_id.flatten())
            .bind(input.airline_id.is_some())
            .bind(input.airline_id.flatten())
            .bind(input.gate_id.is_some())
            .bind(input.gate_id.flatten())
            .bind(input.stand_id.is_some())
            .bind(input.stand_id.flatten())
            .bind(input.departure_airport_id)
            .bind(input.arrival_airport_id)
            .bind(input.scheduled_departure)
            .bind(input.scheduled_arrival)
            .bind(input.status.map(|s| s.as_str()))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "flights", id).await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "flights", id).await
    }

    pub async fn delete_guard(pool: &PgPool, id: DbId) -> Result<DeleteGuard, sqlx::Error> {
        Ok(DeleteGuard::new("flight")
            .dependents("tickets", count_referencing(pool, "tickets", "flight_id", id).await?)
            .dependents("crews", count_referencing(pool, "crews", "flight_id", id).await?)
            .dependents(
                "incidents",
                count_referencing(pool, "incidents", "flight_id", id).await?,
            ))
    }
}
