//! Repository for the `aircraft` table.

use aerodesk_core::delete_guard::DeleteGuard;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::{count_referencing, delete_row, row_exists};
use crate::models::aircraft::{Aircraft, CreateAircraft, UpdateAircraft};

const COLUMNS: &str = "id, aircraft_type_id, tail_number, airline_id, created_at, updated_at";

pub struct AircraftRepo;

impl AircraftRepo {
    pub async fn create(pool: &PgPool, input: &CreateAircraft) -> Result<Aircraft, sqlx::Error> {
        let query = format!(
            "INSERT INTO aircraft (aircraft_type_id, tail_number, airline_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Aircraft>(&query)
            .bind(input.aircraft_type_id)
            .bind(&input.tail_number)
            .bind(input.airline_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Aircraft>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM aircraft WHERE id = $1");
        sqlx::query_as::<_, Aircraft>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List aircraft, optionally restricted to one airline.
    pub async fn list(pool: &PgPool, airline_id: Option<DbId>) -> Result<Vec<Aircraft>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM aircraft
             WHERE ($1::BIGINT IS NULL OR airline_id = $1)
             ORDER BY tail_number"
        );
        sqlx::query_as::<_, Aircraft>(&query)
            .bind(airline_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAircraft,
    ) -> Result<Option<Aircraft>, sqlx::Error> {
        let query = format!(
            "UPDATE aircraft SET
                aircraft_type_id = CASE WHEN $2 THEN $3 ELSE aircraft_type_id END,
                tail_number = COALESCE($4, tail_number),
                airline_id = CASE WHEN $5 THEN $6 ELSE airline_id END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Aircraft>(&query)
            .bind(id)
            .bind(input.aircraft_type_id.is_some())
            .bind(input.aircraft_type_id.flatten())
            .bind(&input.tail_number)
            .bind(input.airline_id.is_some())
            .bind(input.airline_id.flatten())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "aircraft", id).await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "aircraft", id).await
    }

    pub async fn delete_guard(pool: &PgPool, id: DbId) -> Result<DeleteGuard, sqlx::Error> {
        Ok(DeleteGuard::new("aircraft")
            .dependents("flights", count_referencing(pool, "flights", "aircraft_id", id).await?)
            .dependents(
                "maintenance records",
                count_referencing(pool, "maintenance", "aircraft_id", id).await?,
            ))
    }
}
