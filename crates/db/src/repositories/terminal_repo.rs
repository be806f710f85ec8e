//! Repository for the `terminals` table.

use aerodesk_core::delete_guard::DeleteGuard;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::{count_referencing, delete_row, row_exists};
use crate::models::terminal::{CreateTerminal, Terminal, UpdateTerminal};

const COLUMNS: &str = "id, airport_id, name, created_at, updated_at";

pub struct TerminalRepo;

impl TerminalRepo {
    pub async fn create(pool: &PgPool, input: &CreateTerminal) -> Result<Terminal, sqlx::Error> {
        let query = format!(
            "INSERT INTO terminals (airport_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Terminal>(&query)
            .bind(input.airport_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Terminal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM terminals WHERE id = $1");
        sqlx::query_as::<_, Terminal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List terminals, optionally restricted to one airport.
    pub async fn list(pool: &PgPool, airport_id: Option<DbId>) -> Result<Vec<Terminal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM terminals
             WHERE ($1::BIGINT IS NULL OR airport_id = $1)
             ORDER BY airport_id, name"
        );
        sqlx::query_as::<_, Terminal>(&query)
            .bind(airport_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTerminal,
    ) -> Result<Option<Terminal>, sqlx::Error> {
        let query = format!(
            "UPDATE terminals SET
                airport_id = COALESCE($2, airport_id),
                name = COALESCE($3, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Terminal>(&query)
            .bind(id)
            .bind(input.airport_id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "terminals", id).await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "terminals", id).await
    }

    pub async fn delete_guard(pool: &PgPool, id: DbId) -> Result<DeleteGuard, sqlx::Error> {
        Ok(DeleteGuard::new("terminal")
            .dependents("gates", count_referencing(pool, "gates", "terminal_id", id).await?))
    }
}
