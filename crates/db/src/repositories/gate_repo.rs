//! Repository for the `gates` table.

use aerodesk_core::delete_guard::DeleteGuard;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::{count_referencing, delete_row, row_exists};
use crate::models::gate::{CreateGate, Gate, UpdateGate};

const COLUMNS: &str = "id, terminal_id, gate_number, created_at, updated_at";

pub struct GateRepo;

impl GateRepo {
    pub async fn create(pool: &PgPool, input: &CreateGate) -> Result<Gate, sqlx::Error> {
        let query = format!(
            "INSERT INTO gates (terminal_id, gate_number) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gate>(&query)
            .bind(input.terminal_id)
            .bind(&input.gate_number)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gates WHERE id = $1");
        sqlx::query_as::<_, Gate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List gates, optionally restricted to one terminal.
    pub async fn list(pool: &PgPool, terminal_id: Option<DbId>) -> Result<Vec<Gate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gates
             WHERE ($1::BIGINT IS NULL OR terminal_id = $1)
             ORDER BY terminal_id, gate_number"
        );
        sqlx::query_as::<_, Gate>(&query)
            .bind(terminal_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGate,
    ) -> Result<Option<Gate>, sqlx::Error> {
        let query = format!(
            "UPDATE gates SET
                terminal_id = COALESCE($2, terminal_id),
                gate_number = COALESCE($3, gate_number)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gate>(&query)
            .bind(id)
            .bind(input.terminal_id)
            .bind(&input.gate_number)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "gates", id).await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "gates", id).await
    }

    pub async fn delete_guard(pool: &PgPool, id: DbId) -> Result<DeleteGuard, sqlx::Error> {
        Ok(DeleteGuard::new("gate")
            .dependents("flights", count_referencing(pool, "flights", "gate_id", id).await?))
    }
}
