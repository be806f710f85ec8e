//! Handlers for the `/stand` resource.

use aerodesk_core::types::DbId;
use aerodesk_db::models::stand::{CreateStand, Stand, UpdateStand};
use aerodesk_db::repositories::{AirportRepo, StandRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_reference;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidJson};
use crate::middleware::auth::Principal;
use crate::query::AirportScope;
use crate::state::AppState;

/// POST /api/stand
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreateStand>,
) -> AppResult<(StatusCode, Json<Stand>)> {
    ensure_reference(
        AirportRepo::exists(&state.pool, input.airport_id).await?,
        "Airport",
        input.airport_id,
    )?;
    let stand = StandRepo::create(&state.pool, &input).await?;
    tracing::info!(stand_id = stand.id, user_id = principal.id, "Stand created");
    Ok((StatusCode::CREATED, Json(stand)))
}

/// GET /api/stand?airport_id=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(scope): ApiQuery<AirportScope>,
) -> AppResult<Json<Vec<Stand>>> {
    Ok(Json(StandRepo::list(&state.pool, scope.airport_id).await?))
}

/// GET /api/stand/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Stand>> {
    let stand = StandRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Stand", id))?;
    Ok(Json(stand))
}

/// PATCH /api/stand/{id}
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateStand>,
) -> AppResult<Json<Stand>> {
    if let Some(airport_id) = input.airport_id {
        ensure_reference(
            AirportRepo::exists(&state.pool, airport_id).await?,
            "Airport",
            airport_id,
        )?;
    }
    let stand = StandRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Stand", id))?;
    tracing::info!(stand_id = id, user_id = principal.id, "Stand updated");
    Ok(Json(stand))
}

/// DELETE /api/stand/{id}
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !StandRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Stand", id));
    }
    StandRepo::delete_guard(&state.pool, id).await?.check()?;

    if StandRepo::delete(&state.pool, id).await? {
        tracing::info!(stand_id = id, user_id = principal.id, "Stand deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Stand", id))
    }
}
