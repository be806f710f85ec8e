//! Handlers for the `/airline` resource.

use aerodesk_core::types::DbId;
use aerodesk_db::models::airline::{Airline, CreateAirline, UpdateAirline};
use aerodesk_db::repositories::AirlineRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_unique;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidJson};
use crate::middleware::auth::Principal;
use crate::state::AppState;

async fn ensure_code_free(state: &AppState, code: &str, current: Option<DbId>) -> AppResult<()> {
    let holder = AirlineRepo::find_by_iata_code(&state.pool, code).await?;
    ensure_unique(holder.map(|a| a.id), current, || {
        format!(
            "Airline with IATA code {} already exists",
            code.to_uppercase()
        )
    })
}

/// POST /api/airline
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreateAirline>,
) -> AppResult<(StatusCode, Json<Airline>)> {
    ensure_code_free(&state, &input.iata_code, None).await?;
    let airline = AirlineRepo::create(&state.pool, &input).await?;
    tracing::info!(
        airline_id = airline.id,
        iata_code = %airline.iata_code,
        user_id = principal.id,
        "Airline created"
    );
    Ok((StatusCode::CREATED, Json(airline)))
}

/// GET /api/airline
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Airline>>> {
    Ok(Json(AirlineRepo::list(&state.pool).await?))
}

/// GET /api/airline/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Airline>> {
    let airline = AirlineRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Airline", id))?;
    Ok(Json(airline))
}

/// PATCH /api/airline/{id}
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateAirline>,
) -> AppResult<Json<Airline>> {
    if let Some(code) = &input.iata_code {
        ensure_code_free(&state, code, Some(id)).await?;
    }
    let airline = AirlineRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Airline", id))?;
    tracing::info!(airline_id = id, user_id = principal.id, "Airline updated");
    Ok(Json(airline))
}

/// DELETE /api/airline/{id}
///
/// Refused while aircraft or flights still belong to the airline.
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !AirlineRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Airline", id));
    }
    AirlineRepo::delete_guard(&state.pool, id).await?.check()?;

    if AirlineRepo::delete(&state.pool, id).await? {
        tracing::info!(airline_id = id, user_id = principal.id, "Airline deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Airline", id))
    }
}
