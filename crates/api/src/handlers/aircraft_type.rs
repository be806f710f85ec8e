//! Handlers for the `/aircraft-type` resource.

use aerodesk_core::types::DbId;
use aerodesk_db::models::aircraft_type::{AircraftType, CreateAircraftType, UpdateAircraftType};
use aerodesk_db::repositories::AircraftTypeRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidJson};
use crate::middleware::auth::Principal;
use crate::state::AppState;

/// POST /api/aircraft-type
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreateAircraftType>,
) -> AppResult<(StatusCode, Json<AircraftType>)> {
    let aircraft_type = AircraftTypeRepo::create(&state.pool, &input).await?;
    tracing::info!(
        aircraft_type_id = aircraft_type.id,
        user_id = principal.id,
        "Aircraft type created"
    );
    Ok((StatusCode::CREATED, Json(aircraft_type)))
}

/// GET /api/aircraft-type
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AircraftType>>> {
    Ok(Json(AircraftTypeRepo::list(&state.pool).await?))
}

/// GET /api/aircraft-type/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<AircraftType>> {
    let aircraft_type = AircraftTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Aircraft type", id))?;
    Ok(Json(aircraft_type))
}

/// PATCH /api/aircraft-type/{id}
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateAircraftType>,
) -> AppResult<Json<AircraftType>> {
    let aircraft_type = AircraftTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Aircraft type", id))?;
    tracing::info!(aircraft_type_id = id, user_id = principal.id, "Aircraft type updated");
    Ok(Json(aircraft_type))
}

/// DELETE /api/aircraft-type/{id}
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !AircraftTypeRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Aircraft type", id));
    }
    AircraftTypeRepo::delete_guard(&state.pool, id).await?.check()?;

    if AircraftTypeRepo::delete(&state.pool, id).await? {
        tracing::info!(aircraft_type_id = id, user_id = principal.id, "Aircraft type deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Aircraft type", id))
    }
}
