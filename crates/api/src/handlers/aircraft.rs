//! Handlers for the `/aircraft` resource.

use aerodesk_core::types::DbId;
use aerodesk_db::models::aircraft::{Aircraft, CreateAircraft, UpdateAircraft};
use aerodesk_db::repositories::{AircraftRepo, AircraftTypeRepo, AirlineRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_reference;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidJson};
use crate::middleware::auth::Principal;
use crate::query::AirlineScope;
use crate::state::AppState;

async fn check_references(
    state: &AppState,
    aircraft_type_id: Option<DbId>,
    airline_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(type_id) = aircraft_type_id {
        ensure_reference(
            AircraftTypeRepo::exists(&state.pool, type_id).await?,
            "Aircraft type",
            type_id,
        )?;
    }
    if let Some(airline_id) = airline_id {
        ensure_reference(
            AirlineRepo::exists(&state.pool, airline_id).await?,
            "Airline",
            airline_id,
        )?;
    }
    Ok(())
}

/// POST /api/aircraft
///
/// Tail numbers are unique; a duplicate is rejected by `uq_aircraft_tail_number`.
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreateAircraft>,
) -> AppResult<(StatusCode, Json<Aircraft>)> {
    check_references(&state, input.aircraft_type_id, input.airline_id).await?;
    let aircraft = AircraftRepo::create(&state.pool, &input).await?;
    tracing::info!(
        aircraft_id = aircraft.id,
        tail_number = %aircraft.tail_number,
        user_id = principal.id,
        "Aircraft created"
    );
    Ok((StatusCode::CREATED, Json(aircraft)))
}

/// GET /api/aircraft?airline_id=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(scope): ApiQuery<AirlineScope>,
) -> AppResult<Json<Vec<Aircraft>>> {
    Ok(Json(AircraftRepo::list(&state.pool, scope.airline_id).await?))
}

/// GET /api/aircraft/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Aircraft>> {
    let aircraft = AircraftRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Aircraft", id))?;
    Ok(Json(aircraft))
}

/// PATCH /api/aircraft/{id}
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateAircraft>,
) -> AppResult<Json<Aircraft>> {
    check_references(
        &state,
        input.aircraft_type_id.flatten(),
        input.airline_id.flatten(),
    ).await?;
    let aircraft = AircraftRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Aircraft", id))?;
    tracing::info!(aircraft_id = id, user_id = principal.id, "Aircraft updated");
    Ok(Json(aircraft))
}

/// DELETE /api/aircraft/{id}
///
/// Refused while flights or maintenance records reference the aircraft.
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !AircraftRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Aircraft", id));
    }
    AircraftRepo::delete_guard(&state.pool, id).await?.check()?;

    if AircraftRepo::delete(&state.pool, id).await? {
        tracing::info!(aircraft_id = id, user_id = principal.id, "Aircraft deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Aircraft", id))
    }
}
