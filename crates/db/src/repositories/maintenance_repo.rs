//! Repository for the `maintenance` table.

use aerodesk_core::pagination::Page;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::delete_row;
use crate::models::maintenance::{CreateMaintenance, Maintenance, UpdateMaintenance};

const COLUMNS: &str = "id, aircraft_id, personnel_id, start_time, end_time, description, \
                       created_at, updated_at";

pub struct MaintenanceRepo;

impl MaintenanceRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaintenance,
    ) -> Result<Maintenance, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance (aircraft_id, personnel_id, start_time, end_time, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Maintenance>(&query)
            .bind(input.aircraft_id)
            .bind(input.personnel_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Maintenance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance WHERE id = $1");
        sqlx::query_as::<_, Maintenance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of maintenance records, latest start first, plus the total count.
    pub async fn list_page(
        pool: &PgPool,
        page: Page,
    ) -> Result<(Vec<Maintenance>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance
             ORDER BY start_time DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Maintenance>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM maintenance")
            .fetch_one(pool)
            .await?;
        Ok((items, total))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaintenance,
    ) -> Result<Option<Maintenance>, sqlx::Error> {
        let query = format!(
            "UPDATE maintenance SET
                aircraft_id = COALESCE($2, aircraft_id),
                personnel_id = COALESCE($3, personnel_id),
                start_time = COALESCE($4, start_time),
                end_time = CASE WHEN $5 THEN $6 ELSE end_time END,
                description = COALESCE($7, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Maintenance>(&query)
            .bind(id)
            .bind(input.aircraft_id)
            .bind(input.personnel_id)
            .bind(input.start_time)
            .bind(input.end_time.is_some())
            .bind(input.end_time.flatten())
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "maintenance", id).await
    }
}
