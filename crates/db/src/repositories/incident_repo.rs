//! Repository for the `incidents` table.

use aerodesk_core::pagination::Page;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::delete_row;
use crate::models::incident::{CreateIncident, Incident, UpdateIncident};

const COLUMNS: &str = "id, flight_id, personnel_id, incident_time, description, severity, \
                       created_at, updated_at";

pub struct IncidentRepo;

impl IncidentRepo {
    pub async fn create(pool: &PgPool, input: &CreateIncident) -> Result<Incident, sqlx::Error> {
        let query = format!(
            "INSERT INTO incidents (flight_id, personnel_id, incident_time, description, severity)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(input.flight_id)
            .bind(input.personnel_id)
            .bind(input.incident_time)
            .bind(&input.description)
            .bind(input.severity.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM incidents WHERE id = $1");
        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of incidents, newest first, plus the total count.
    pub async fn list_page(pool: &PgPool, page: Page) -> Result<(Vec<Incident>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM incidents
             ORDER BY incident_time DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Incident>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM incidents")
            .fetch_one(pool)
            .await?;
        Ok((items, total))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIncident,
    ) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!(
            "UPDATE incidents SET
                flight_id = CASE WHEN $2 THEN $3 ELSE flight_id END,
                personnel_id = CASE WHEN $4 THEN $5 ELSE personnel_id END,
                incident_time = COALESCE($6, incident_time),
                description = COALESCE($7, description),
                severity = COALESCE($8, severity)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .bind(input.flight_id.is_some())
            .bind(input.flight_id.flatten())
            .bind(input.personnel_id.is_some())
            .bind(input.personnel_id.flatten())
            .bind(input.incident_time)
            .bind(&input.description)
            .bind(input.severity.map(|s| s.as_str()))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "incidents", id).await
    }
}
