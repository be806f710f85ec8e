//! Repository for the `checkins` and `baggage` tables.
//!
//! Check-in writes are composite: the check-in row and its full baggage set
//! are written in one transaction. Dropping the transaction on any error
//! rolls both back.

use std::collections::HashMap;

use aerodesk_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use super::row_exists;
use crate::models::checkin::{Baggage, Checkin, CheckinWithBaggage, NewBaggage};

const COLUMNS: &str = "id, ticket_id, checkin_time, baggage_count, created_at, updated_at";
const BAGGAGE_COLUMNS: &str = "id, checkin_id, weight_kg, label_number, created_at, updated_at";

/// Provides composite writes and reads for check-ins with their baggage.
pub struct CheckinRepo;

impl CheckinRepo {
    /// Insert a check-in stamped with the current time, plus its baggage.
    pub async fn create(
        pool: &PgPool,
        ticket_id: DbId,
        baggage_count: i32,
        baggage: &[NewBaggage],
    ) -> Result<CheckinWithBaggage, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO checkins (ticket_id, checkin_time, baggage_count)
             VALUES ($1, NOW(), $2)
             RETURNING {COLUMNS}"
        );
        let checkin = sqlx::query_as::<_, Checkin>(&query)
            .bind(ticket_id)
            .bind(baggage_count)
            .fetch_one(&mut *tx)
            .await?;

        let baggage = insert_baggage(&mut tx, checkin.id, baggage).await?;

        tx.commit().await?;
        Ok(CheckinWithBaggage { checkin, baggage })
    }

    /// Update a check-in and, when `baggage` is supplied, replace its bags.
    ///
    /// The check-in time is preserved. Returns `None` if no check-in with
    /// the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        ticket_id: Option<DbId>,
        baggage_count: Option<i32>,
        baggage: Option<&[NewBaggage]>,
    ) -> Result<Option<CheckinWithBaggage>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE checkins SET
                ticket_id = COALESCE($2, ticket_id),
                baggage_count = COALESCE($3, baggage_count)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(checkin) = sqlx::query_as::<_, Checkin>(&query)
            .bind(id)
            .bind(ticket_id)
            .bind(baggage_count)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let baggage = match baggage {
            Some(bags) => {
                sqlx::query("DELETE FROM baggage WHERE checkin_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                insert_baggage(&mut tx, id, bags).await?
            }
            None => {
                let query = format!(
                    "SELECT {BAGGAGE_COLUMNS} FROM baggage WHERE checkin_id = $1 ORDER BY id"
                );
                sqlx::query_as::<_, Baggage>(&query)
                    .bind(id)
                    .fetch_all(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(Some(CheckinWithBaggage { checkin, baggage }))
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CheckinWithBaggage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM checkins WHERE id = $1");
        let Some(checkin) = sqlx::query_as::<_, Checkin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let baggage = Self::baggage_for(pool, id).await?;
        Ok(Some(CheckinWithBaggage { checkin, baggage }))
    }

    /// The id of the check-in attached to a ticket, if any.
    pub async fn find_id_by_ticket(
        pool: &PgPool,
        ticket_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM checkins WHERE ticket_id = $1")
            .bind(ticket_id)
            .fetch_optional(pool)
            .await
    }

    /// List check-ins with their baggage, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<CheckinWithBaggage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM checkins ORDER BY checkin_time DESC, id DESC");
        let checkins = sqlx::query_as::<_, Checkin>(&query).fetch_all(pool).await?;

        let ids: Vec<DbId> = checkins.iter().map(|c| c.id).collect();
        let query = format!(
            "SELECT {BAGGAGE_COLUMNS} FROM baggage WHERE checkin_id = ANY($1) ORDER BY id"
        );
        let bags = sqlx::query_as::<_, Baggage>(&query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut by_checkin: HashMap<DbId, Vec<Baggage>> = HashMap::new();
        for bag in bags {
            by_checkin.entry(bag.checkin_id).or_default().push(bag);
        }

        Ok(checkins
            .into_iter()
            .map(|checkin| {
                let baggage = by_checkin.remove(&checkin.id).unwrap_or_default();
                CheckinWithBaggage { checkin, baggage }
            })
            .collect())
    }

    pub async fn baggage_for(pool: &PgPool, checkin_id: DbId) -> Result<Vec<Baggage>, sqlx::Error> {
        let query =
            format!("SELECT {BAGGAGE_COLUMNS} FROM baggage WHERE checkin_id = $1 ORDER BY id");
        sqlx::query_as::<_, Baggage>(&query)
            .bind(checkin_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a check-in and its baggage in one transaction.
    ///
    /// Returns `true` if the check-in existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !row_exists(&mut *tx, "checkins", id).await? {
            return Ok(false);
        }
        sqlx::query("DELETE FROM baggage WHERE checkin_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM checkins WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}

async fn insert_baggage(
    tx: &mut Transaction<'_, Postgres>,
    checkin_id: DbId,
    bags: &[NewBaggage],
) -> Result<Vec<Baggage>, sqlx::Error> {
    let query = format!(
        "INSERT INTO baggage (checkin_id, weight_kg, label_number)
         VALUES ($1, $2, $3)
         RETURNING {BAGGAGE_COLUMNS}"
    );
    let mut inserted = Vec::with_capacity(bags.len());
    for bag in bags {
        let row = sqlx::query_as::<_, Baggage>(&query)
            .bind(checkin_id)
            .bind(bag.weight_kg)
            .bind(&bag.label_number)
            .fetch_one(&mut **tx)
            .await?;
        inserted.push(row);
    }
    Ok(inserted)
}
