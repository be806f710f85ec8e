//! Repository for the `tickets` table.

use aerodesk_core::delete_guard::DeleteGuard;
use aerodesk_core::types::DbId;
use sqlx::PgPool;

use super::{count_referencing, delete_row, row_exists};
use crate::models::ticket::{CreateTicket, Ticket, UpdateTicket};

const COLUMNS: &str = "id, passenger_id, flight_id, seat_number, ticket_price, \
                       baggage_included, created_at, updated_at";

pub struct TicketRepo;

impl TicketRepo {
    pub async fn create(pool: &PgPool, input: &CreateTicket) -> Result<Ticket, sqlx::Error> {
        let query = format!(
            "INSERT INTO tickets (passenger_id, flight_id, seat_number, ticket_price, baggage_included)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(input.passenger_id)
            .bind(input.flight_id)
            .bind(&input.seat_number)
            .bind(input.ticket_price)
            .bind(input.baggage_included)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets WHERE id = $1");
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tickets, optionally restricted to a flight and/or a passenger.
    pub async fn list(
        pool: &PgPool,
        flight_id: Option<DbId>,
        passenger_id: Option<DbId>,
    ) -> Result<Vec<Ticket>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tickets
             WHERE ($1::BIGINT IS NULL OR flight_id = $1)
               AND ($2::BIGINT IS NULL OR passenger_id = $2)
             ORDER BY id"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(flight_id)
            .bind(passenger_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTicket,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!(
            "UPDATE tickets SET
                passenger_id = COALESCE($2, passenger_id),
                flight_id = COALESCE($3, flight_id),
                seat_number = CASE WHEN $4 THEN $5 ELSE seat_number END,
                ticket_price = CASE WHEN $6 THEN $7 ELSE ticket_price END,
                baggage_included = COALESCE($8, baggage_included)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .bind(input.passenger_id)
            .bind(input.flight_id)
            .bind(input.seat_number.is_some())
            .bind(input.seat_number.clone().flatten())
            .bind(input.ticket_price.is_some())
            .bind(input.ticket_price.flatten())
            .bind(input.baggage_included)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "tickets", id).await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "tickets", id).await
    }

    pub async fn delete_guard(pool: &PgPool, id: DbId) -> Result<DeleteGuard, sqlx::Error> {
        Ok(DeleteGuard::new("ticket")
            .dependents("check-ins", count_referencing(pool, "checkins", "ticket_id", id).await?))
    }
}
