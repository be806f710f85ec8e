//! Repository for the `aircraft_types` table.

use aerodesk_core::delete_guard::DeleteGuard;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::{count_referencing, delete_row, row_exists};
use crate::models::aircraft_type::{AircraftType, CreateAircraftType, UpdateAircraftType};

const COLUMNS: &str = "id, model, manufacturer, seats, max_range_km, created_at, updated_at";

pub struct AircraftTypeRepo;

impl AircraftTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateAircraftType,
    ) -> Result<AircraftType, sqlx::Error> {
        let query = format!(
            "INSERT INTO aircraft_types (model, manufacturer, seats, max_range_km)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AircraftType>(&query)
            .bind(&input.model)
            .bind(&input.manufacturer)
            .bind(input.seats)
            .bind(input.max_range_km)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AircraftType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM aircraft_types WHERE id = $1");
        sqlx::query_as::<_, AircraftType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<AircraftType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM aircraft_types ORDER BY manufacturer, model");
        sqlx::query_as::<_, AircraftType>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAircraftType,
    ) -> Result<Option<AircraftType>, sqlx::Error> {
        let query = format!(
            "UPDATE aircraft_types SET
                model = COALESCE($2, model),
                manufacturer = COALESCE($3, manufacturer),
                seats = CASE WHEN $4 THEN $5 ELSE seats END,
                max_range_km = CASE WHEN $6 THEN $7 ELSE max_range_km END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AircraftType>(&query)
            .bind(id)
            .bind(&input.model)
            .bind(&input.manufacturer)
            .bind(input.seats.is_some())
            .bind(input.seats.flatten())
            .bind(input.max_range_km.is_some())
            .bind(input.max_range_km.flatten())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "aircraft_types", id).await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "aircraft_types", id).await
    }

    pub async fn delete_guard(pool: &PgPool, id: DbId) -> Result<DeleteGuard, sqlx::Error> {
        Ok(DeleteGuard::new("aircraft type").dependents(
            "aircraft",
            count_referencing(pool, "aircraft", "aircraft_type_id", id).await?,
        ))
    }
}
