//! Repository for the `airports` table.

use aerodesk_core::delete_guard::DeleteGuard;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::{count_referencing, delete_row, row_exists};
use crate::models::airport::{Airport, CreateAirport, UpdateAirport};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, country, iata_code, icao_code, created_at, updated_at";

/// Provides CRUD operations for airports.
pub struct AirportRepo;

impl AirportRepo {
    /// Insert a new airport, returning the created row. Codes are stored upper-case.
    pub async fn create(pool: &PgPool, input: &CreateAirport) -> Result<Airport, sqlx::Error> {
        let query = format!(
            "INSERT INTO airports (name, city, country, iata_code, icao_code)
             VALUES ($1, $2, $3, UPPER($4), UPPER($5))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Airport>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.country)
            .bind(&input.iata_code)
            .bind(&input.icao_code)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Airport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airports WHERE id = $1");
        sqlx::query_as::<_, Airport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all airports ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Airport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airports ORDER BY name, id");
        sqlx::query_as::<_, Airport>(&query).fetch_all(pool).await
    }

    /// Update an airport. Only supplied fields in `input` are applied; a
    /// `null` code clears it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAirport,
    ) -> Result<Option<Airport>, sqlx::Error> {
        let query = format!(
            "UPDATE airports SET
                name = COALESCE($2, name),
                city = COALESCE($3, city),
                country = COALESCE($4, country),
                iata_code = CASE WHEN $5 THEN UPPER($6) ELSE iata_code END,
                icao_code = CASE WHEN $7 THEN UPPER($8) ELSE icao_code END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Airport>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.country)
            .bind(input.iata_code.is_some())
            .bind(input.iata_code.clone().flatten())
            .bind(input.icao_code.is_some())
            .bind(input.icao_code.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "airports", id).await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "airports", id).await
    }

    /// Collect the rows that would block deleting this airport.
    pub async fn delete_guard(pool: &PgPool, id: DbId) -> Result<DeleteGuard, sqlx::Error> {
        Ok(DeleteGuard::new("airport")
            .dependents(
                "departure flights",
                count_referencing(pool, "flights", "departure_airport_id", id).await?,
            )
            .dependents(
                "arrival flights",
                count_referencing(pool, "flights", "arrival_airport_id", id).await?,
            )
            .dependents(
                "terminals",
                count_referencing(pool, "terminals", "airport_id", id).await?,
            )
            .dependents(
                "stands",
                count_referencing(pool, "stands", "airport_id", id).await?,
            ))
    }
}
