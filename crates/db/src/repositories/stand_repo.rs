//! Repository for the `stands` table.

use aerodesk_core::delete_guard::DeleteGuard;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::{count_referencing, delete_row, row_exists};
use crate::models::stand::{CreateStand, Stand, UpdateStand};

const COLUMNS: &str = "id, airport_id, stand_number, created_at, updated_at";

pub struct StandRepo;

impl StandRepo {
    pub async fn create(pool: &PgPool, input: &CreateStand) -> Result<Stand, sqlx::Error> {
        let query = format!(
            "INSERT INTO stands (airport_id, stand_number) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stand>(&query)
            .bind(input.airport_id)
            .bind(&input.stand_number)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Stand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stands WHERE id = $1");
        sqlx::query_as::<_, Stand>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List stands, optionally restricted to one airport.
    pub async fn list(pool: &PgPool, airport_id: Option<DbId>) -> Result<Vec<Stand>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM stands
             WHERE ($1::BIGINT IS NULL OR airport_id = $1)
             ORDER BY airport_id, stand_number"
        );
        sqlx::query_as::<_, Stand>(&query)
            .bind(airport_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStand,
    ) -> Result<Option<Stand>, sqlx::Error> {
        let query = format!(
            "UPDATE stands SET
                airport_id = COALESCE($2, airport_id),
                stand_number = COALESCE($3, stand_number)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stand>(&query)
            .bind(id)
            .bind(input.airport_id)
            .bind(&input.stand_number)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "stands", id).await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "stands", id).await
    }

    pub async fn delete_guard(pool: &PgPool, id: DbId) -> Result<DeleteGuard, sqlx::Error> {
        Ok(DeleteGuard::new("stand")
            .dependents("flights", count_referencing(pool, "flights", "stand_id", id).await?))
    }
}
