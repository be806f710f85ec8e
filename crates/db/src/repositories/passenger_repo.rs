//! Repository for the `passengers` table.

use aerodesk_core::delete_guard::DeleteGuard;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::{count_referencing, delete_row, row_exists};
use crate::models::passenger::{CreatePassenger, Passenger, UpdatePassenger};

const COLUMNS: &str =
    "id, name, passport_number, nationality, birth_date, created_at, updated_at";

pub struct PassengerRepo;

impl PassengerRepo {
    pub async fn create(pool: &PgPool, input: &CreatePassenger) -> Result<Passenger, sqlx::Error> {
        let query = format!(
            "INSERT INTO passengers (name, passport_number, nationality, birth_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Passenger>(&query)
            .bind(&input.name)
            .bind(&input.passport_number)
            .bind(&input.nationality)
            .bind(input.birth_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Passenger>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passengers WHERE id = $1");
        sqlx::query_as::<_, Passenger>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_passport(
        pool: &PgPool,
        passport_number: &str,
    ) -> Result<Option<Passenger>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passengers WHERE passport_number = $1");
        sqlx::query_as::<_, Passenger>(&query)
            .bind(passport_number)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Passenger>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passengers ORDER BY name, id");
        sqlx::query_as::<_, Passenger>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePassenger,
    ) -> Result<Option<Passenger>, sqlx::Error> {
        let query = format!(
            "UPDATE passengers SET
                name = COALESCE($2, name),
                passport_number = COALESCE($3, passport_number),
                nationality = CASE WHEN $4 THEN $5 ELSE nationality END,
                birth_date = CASE WHEN $6 THEN $7 ELSE birth_date END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Passenger>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.passport_number)
            .bind(input.nationality.is_some())
            .bind(input.nationality.clone().flatten())
            .bind(input.birth_date.is_some())
            .bind(input.birth_date.flatten())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "passengers", id).await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "passengers", id).await
    }

    pub async fn delete_guard(pool: &PgPool, id: DbId) -> Result<DeleteGuard, sqlx::Error> {
        Ok(DeleteGuard::new("passenger")
            .dependents("tickets", count_referencing(pool, "tickets", "passenger_id", id).await?))
    }
}
