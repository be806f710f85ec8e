//! Repository for the `personnel` table.

use aerodesk_core::delete_guard::DeleteGuard;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::{count_referencing, delete_row, row_exists};
use crate::models::personnel::{CreatePersonnel, Personnel, UpdatePersonnel};

const COLUMNS: &str =
    "id, name, position_id, license_number, hired_date, created_at, updated_at";

pub struct PersonnelRepo;

impl PersonnelRepo {
    pub async fn create(pool: &PgPool, input: &CreatePersonnel) -> Result<Personnel, sqlx::Error> {
        let query = format!(
            "INSERT INTO personnel (name, position_id, license_number, hired_date)
             VALUES ($1, $2, NULLIF($3, ''), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(&input.name)
            .bind(input.position_id)
            .bind(&input.license_number)
            .bind(input.hired_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel WHERE id = $1");
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_license(
        pool: &PgPool,
        license_number: &str,
    ) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel WHERE license_number = $1");
        sqlx::query_as::<_, Personnel>(&query)
            .bind(license_number)
            .fetch_optional(pool)
            .await
    }

    /// List all personnel ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Personnel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel ORDER BY name, id");
        sqlx::query_as::<_, Personnel>(&query).fetch_all(pool).await
    }

    /// Return the subset of `ids` that exist.
    pub async fn existing_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM personnel WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePersonnel,
    ) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!(
            "UPDATE personnel SET
                name = COALESCE($2, name),
                position_id = CASE WHEN $3 THEN $4 ELSE position_id END,
                license_number = CASE WHEN $5 THEN NULLIF(TRIM($6), '') ELSE license_number END,
                hired_date = CASE WHEN $7 THEN $8 ELSE hired_date END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.position_id.is_some())
            .bind(input.position_id.flatten())
            .bind(input.license_number.is_some())
            .bind(input.license_number.clone().flatten())
            .bind(input.hired_date.is_some())
            .bind(input.hired_date.flatten())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "personnel", id).await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "personnel", id).await
    }

    pub async fn delete_guard(pool: &PgPool, id: DbId) -> Result<DeleteGuard, sqlx::Error> {
        Ok(DeleteGuard::new("personnel")
            .dependents(
                "crew memberships",
                count_referencing(pool, "crew_members", "personnel_id", id).await?,
            )
            .dependents(
                "maintenance records",
                count_referencing(pool, "maintenance", "personnel_id", id).await?,
            )
            .dependents(
                "incidents",
                count_referencing(pool, "incidents", "personnel_id", id).await?,
            ))
    }
}
