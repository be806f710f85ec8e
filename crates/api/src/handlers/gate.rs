//! Handlers for the `/gate` resource.

use aerodesk_core::types::DbId;
use aerodesk_db::models::gate::{CreateGate, Gate, UpdateGate};
use aerodesk_db::repositories::{GateRepo, TerminalRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_reference;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidJson};
use crate::middleware::auth::Principal;
use crate::query::TerminalScope;
use crate::state::AppState;

/// POST /api/gate
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreateGate>,
) -> AppResult<(StatusCode, Json<Gate>)> {
    ensure_reference(
        TerminalRepo::exists(&state.pool, input.terminal_id).await?,
        "Terminal",
        input.terminal_id,
    )?;
    let gate = GateRepo::create(&state.pool, &input).await?;
    tracing::info!(gate_id = gate.id, user_id = principal.id, "Gate created");
    Ok((StatusCode::CREATED, Json(gate)))
}

/// GET /api/gate?terminal_id=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(scope): ApiQuery<TerminalScope>,
) -> AppResult<Json<Vec<Gate>>> {
    Ok(Json(GateRepo::list(&state.pool, scope.terminal_id).await?))
}

/// GET /api/gate/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Gate>> {
    let gate = GateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Gate", id))?;
    Ok(Json(gate))
}

/// PATCH /api/gate/{id}
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateGate>,
) -> AppResult<Json<Gate>> {
    if let Some(terminal_id) = input.terminal_id {
        ensure_reference(
            TerminalRepo::exists(&state.pool, terminal_id).await?,
            "Terminal",
            terminal_id,
        )?;
    }
    let gate = GateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Gate", id))?;
    tracing::info!(gate_id = id, user_id = principal.id, "Gate updated");
    Ok(Json(gate))
}

/// DELETE /api/gate/{id}
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !GateRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Gate", id));
    }
    GateRepo::delete_guard(&state.pool, id).await?.check()?;

    if GateRepo::delete(&state.pool, id).await? {
        tracing::info!(gate_id = id, user_id = principal.id, "Gate deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Gate", id))
    }
}
