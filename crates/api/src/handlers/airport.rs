//! Handlers for the `/airport` resource.

use aerodesk_core::types::DbId;
use aerodesk_db::models::airport::{Airport, CreateAirport, UpdateAirport};
use aerodesk_db::repositories::AirportRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidJson};
use crate::middleware::auth::Principal;
use crate::state::AppState;

/// POST /api/airport
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreateAirport>,
) -> AppResult<(StatusCode, Json<Airport>)> {
    let airport = AirportRepo::create(&state.pool, &input).await?;
    tracing::info!(airport_id = airport.id, user_id = principal.id, "Airport created");
    Ok((StatusCode::CREATED, Json(airport)))
}

/// GET /api/airport
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Airport>>> {
    Ok(Json(AirportRepo::list(&state.pool).await?))
}

/// GET /api/airport/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Airport>> {
    let airport = AirportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Airport", id))?;
    Ok(Json(airport))
}

/// PATCH /api/airport/{id}
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateAirport>,
) -> AppResult<Json<Airport>> {
    let airport = AirportRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Airport", id))?;
    tracing::info!(airport_id = id, user_id = principal.id, "Airport updated");
    Ok(Json(airport))
}

/// DELETE /api/airport/{id}
///
/// Refused while flights, terminals or stands still reference the airport.
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !AirportRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Airport", id));
    }
    AirportRepo::delete_guard(&state.pool, id).await?.check()?;

    if AirportRepo::delete(&state.pool, id).await? {
        tracing::info!(airport_id = id, user_id = principal.id, "Airport deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Airport", id))
    }
}
