//! Handlers for the `/checkin` resource.
//!
//! A check-in and its baggage are written as one unit: the check-in row is
//! inserted or updated, the owned bags are replaced by the supplied list,
//! and any failure rolls the whole write back.

use aerodesk_core::checkin::{ensure_ticket_free, validate_bag, validate_baggage_count};
use aerodesk_core::types::DbId;
use aerodesk_db::models::checkin::{CheckinWithBaggage, CreateCheckin, NewBaggage, UpdateCheckin};
use aerodesk_db::repositories::{CheckinRepo, TicketRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_reference;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidJson};
use crate::middleware::auth::Principal;
use crate::state::AppState;

fn validate_baggage(bags: &[NewBaggage]) -> AppResult<()> {
    for (index, bag) in bags.iter().enumerate() {
        validate_bag(index, bag.weight_kg, &bag.label_number)?;
    }
    Ok(())
}

/// The ticket must exist and must not be checked in by another check-in.
async fn ensure_ticket_available(
    state: &AppState,
    ticket_id: DbId,
    current: Option<DbId>,
) -> AppResult<()> {
    ensure_reference(
        TicketRepo::exists(&state.pool, ticket_id).await?,
        "Ticket",
        ticket_id,
    )?;
    let holder = CheckinRepo::find_id_by_ticket(&state.pool, ticket_id).await?;
    ensure_ticket_free(ticket_id, holder, current)?;
    Ok(())
}

/// POST /api/checkin
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreateCheckin>,
) -> AppResult<(StatusCode, Json<CheckinWithBaggage>)> {
    validate_baggage_count(input.baggage_count)?;
    validate_baggage(&input.baggage)?;
    ensure_ticket_available(&state, input.ticket_id, None).await?;

    let checkin =
        CheckinRepo::create(&state.pool, input.ticket_id, input.baggage_count, &input.baggage)
            .await?;
    tracing::info!(
        checkin_id = checkin.checkin.id,
        ticket_id = input.ticket_id,
        bags = checkin.baggage.len(),
        user_id = principal.id,
        "Check-in created"
    );
    Ok((StatusCode::CREATED, Json(checkin)))
}

/// GET /api/checkin
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CheckinWithBaggage>>> {
    Ok(Json(CheckinRepo::list(&state.pool).await?))
}

/// GET /api/checkin/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<CheckinWithBaggage>> {
    let checkin = CheckinRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Check-in", id))?;
    Ok(Json(checkin))
}

/// PATCH /api/checkin/{id}
///
/// When `baggage` is present it replaces the stored bags; when omitted the
/// stored bags are kept. The check-in time never changes.
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateCheckin>,
) -> AppResult<Json<CheckinWithBaggage>> {
    if let Some(count) = input.baggage_count {
        validate_baggage_count(count)?;
    }
    if let Some(bags) = &input.baggage {
        validate_baggage(bags)?;
    }
    if CheckinRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::not_found("Check-in", id));
    }
    if let Some(ticket_id) = input.ticket_id {
        ensure_ticket_available(&state, ticket_id, Some(id)).await?;
    }

    let checkin = CheckinRepo::update(
        &state.pool,
        id,
        input.ticket_id,
        input.baggage_count,
        input.baggage.as_deref(),
    )
    .await?
    .ok_or(AppError::not_found("Check-in", id))?;
    tracing::info!(
        checkin_id = id,
        bags = checkin.baggage.len(),
        user_id = principal.id,
        "Check-in updated"
    );
    Ok(Json(checkin))
}

/// DELETE /api/checkin/{id}
///
/// Removes the check-in together with its baggage.
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if CheckinRepo::delete(&state.pool, id).await? {
        tracing::info!(checkin_id = id, user_id = principal.id, "Check-in deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Check-in", id))
    }
}
