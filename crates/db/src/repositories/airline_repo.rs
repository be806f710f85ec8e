//! Repository for the `airlines` table.

use aerodesk_core::delete_guard::DeleteGuard;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::{count_referencing, delete_row, row_exists};
use crate::models::airline::{Airline, CreateAirline, UpdateAirline};

const COLUMNS: &str = "id, name, iata_code, country, created_at, updated_at";

/// Provides CRUD operations for airlines.
pub struct AirlineRepo;

impl AirlineRepo {
    /// Insert a new airline. The IATA code is upper-cased before storage.
    pub async fn create(pool: &PgPool, input: &CreateAirline) -> Result<Airline, sqlx::Error> {
        let query = format!(
            "INSERT INTO airlines (name, iata_code, country)
             VALUES ($1, UPPER($2), $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Airline>(&query)
            .bind(&input.name)
            .bind(&input.iata_code)
            .bind(&input.country)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Airline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airlines WHERE id = $1");
        sqlx::query_as::<_, Airline>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an airline by IATA code, case-insensitively.
    pub async fn find_by_iata_code(
        pool: &PgPool,
        iata_code: &str,
    ) -> Result<Option<Airline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airlines WHERE iata_code = UPPER($1)");
        sqlx::query_as::<_, Airline>(&query)
            .bind(iata_code)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Airline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airlines ORDER BY name, id");
        sqlx::query_as::<_, Airline>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAirline,
    ) -> Result<Option<Airline>, sqlx::Error> {
        let query = format!(
            "UPDATE airlines SET
                name = COALESCE($2, name),
                iata_code = COALESCE(UPPER($3), iata_code),
                country = COALESCE($4, country)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Airline>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.iata_code)
            .bind(&input.country)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "airlines", id).await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "airlines", id).await
    }

    pub async fn delete_guard(pool: &PgPool, id: DbId) -> Result<DeleteGuard, sqlx::Error> {
        Ok(DeleteGuard::new("airline")
            .dependents("aircraft", count_referencing(pool, "aircraft", "airline_id", id).await?)
            .dependents("flights", count_referencing(pool, "flights", "airline_id", id).await?))
    }
}
