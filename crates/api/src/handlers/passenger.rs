//! Handlers for the `/passenger` resource.

use aerodesk_core::types::DbId;
use aerodesk_db::models::passenger::{CreatePassenger, Passenger, UpdatePassenger};
use aerodesk_db::repositories::PassengerRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_unique;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidJson};
use crate::middleware::auth::Principal;
use crate::state::AppState;

async fn ensure_passport_free(
    state: &AppState,
    passport_number: &str,
    current: Option<DbId>,
) -> AppResult<()> {
    let holder = PassengerRepo::find_by_passport(&state.pool, passport_number).await?;
    ensure_unique(holder.map(|p| p.id), current, || {
        format!("Passenger with passport number {passport_number} already exists")
    })
}

/// POST /api/passenger
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreatePassenger>,
) -> AppResult<(StatusCode, Json<Passenger>)> {
    ensure_passport_free(&state, &input.passport_number, None).await?;
    let passenger = PassengerRepo::create(&state.pool, &input).await?;
    tracing::info!(passenger_id = passenger.id, user_id = principal.id, "Passenger created");
    Ok((StatusCode::CREATED, Json(passenger)))
}

/// GET /api/passenger
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Passenger>>> {
    Ok(Json(PassengerRepo::list(&state.pool).await?))
}

/// GET /api/passenger/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Passenger>> {
    let passenger = PassengerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Passenger", id))?;
    Ok(Json(passenger))
}

/// PATCH /api/passenger/{id}
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdatePassenger>,
) -> AppResult<Json<Passenger>> {
    if let Some(passport_number) = &input.passport_number {
        ensure_passport_free(&state, passport_number, Some(id)).await?;
    }
    let passenger = PassengerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Passenger", id))?;
    tracing::info!(passenger_id = id, user_id = principal.id, "Passenger updated");
    Ok(Json(passenger))
}

/// DELETE /api/passenger/{id}
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !PassengerRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Passenger", id));
    }
    PassengerRepo::delete_guard(&state.pool, id).await?.check()?;

    if PassengerRepo::delete(&state.pool, id).await? {
        tracing::info!(passenger_id = id, user_id = principal.id, "Passenger deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Passenger", id))
    }
}
