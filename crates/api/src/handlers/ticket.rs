//! Handlers for the `/ticket` resource.

use aerodesk_core::types::DbId;
use aerodesk_db::models::ticket::{CreateTicket, Ticket, UpdateTicket};
use aerodesk_db::repositories::{FlightRepo, PassengerRepo, TicketRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_reference;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidJson};
use crate::middleware::auth::Principal;
use crate::query::TicketScope;
use crate::state::AppState;

async fn check_references(
    state: &AppState,
    passenger_id: Option<DbId>,
    flight_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(passenger_id) = passenger_id {
        ensure_reference(
            PassengerRepo::exists(&state.pool, passenger_id).await?,
            "Passenger",
            passenger_id,
        )?;
    }
    if let Some(flight_id) = flight_id {
        ensure_reference(
            FlightRepo::exists(&state.pool, flight_id).await?,
            "Flight",
            flight_id,
        )?;
    }
    Ok(())
}

/// POST /api/ticket
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreateTicket>,
) -> AppResult<(StatusCode, Json<Ticket>)> {
    check_references(&state, Some(input.passenger_id), Some(input.flight_id)).await?;
    let ticket = TicketRepo::create(&state.pool, &input).await?;
    tracing::info!(
        ticket_id = ticket.id,
        flight_id = ticket.flight_id,
        user_id = principal.id,
        "Ticket created"
    );
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// GET /api/ticket?flight_id=&passenger_id=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(scope): ApiQuery<TicketScope>,
) -> AppResult<Json<Vec<Ticket>>> {
    let tickets = TicketRepo::list(&state.pool, scope.flight_id, scope.passenger_id).await?;
    Ok(Json(tickets))
}

/// GET /api/ticket/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Ticket>> {
    let ticket = TicketRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Ticket", id))?;
    Ok(Json(ticket))
}

/// PATCH /api/ticket/{id}
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateTicket>,
) -> AppResult<Json<Ticket>> {
    check_references(&state, input.passenger_id, input.flight_id).await?;
    let ticket = TicketRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Ticket", id))?;
    tracing::info!(ticket_id = id, user_id = principal.id, "Ticket updated");
    Ok(Json(ticket))
}

/// DELETE /api/ticket/{id}
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !TicketRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Ticket", id));
    }
    TicketRepo::delete_guard(&state.pool, id).await?.check()?;

    if TicketRepo::delete(&state.pool, id).await? {
        tracing::info!(ticket_id = id, user_id = principal.id, "Ticket deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Ticket", id))
    }
}
