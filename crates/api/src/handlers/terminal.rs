//! Handlers for the `/terminal` resource.

use aerodesk_core::types::DbId;
use aerodesk_db::models::terminal::{CreateTerminal, Terminal, UpdateTerminal};
use aerodesk_db::repositories::{AirportRepo, TerminalRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_reference;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidJson};
use crate::middleware::auth::Principal;
use crate::query::AirportScope;
use crate::state::AppState;

/// POST /api/terminal
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreateTerminal>,
) -> AppResult<(StatusCode, Json<Terminal>)> {
    ensure_reference(
        AirportRepo::exists(&state.pool, input.airport_id).await?,
        "Airport",
        input.airport_id,
    )?;
    let terminal = TerminalRepo::create(&state.pool, &input).await?;
    tracing::info!(terminal_id = terminal.id, user_id = principal.id, "Terminal created");
    Ok((StatusCode::CREATED, Json(terminal)))
}

/// GET /api/terminal?airport_id=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(scope): ApiQuery<AirportScope>,
) -> AppResult<Json<Vec<Terminal>>> {
    Ok(Json(TerminalRepo::list(&state.pool, scope.airport_id).await?))
}

/// GET /api/terminal/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Terminal>> {
    let terminal = TerminalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Terminal", id))?;
    Ok(Json(terminal))
}

/// PATCH /api/terminal/{id}
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateTerminal>,
) -> AppResult<Json<Terminal>> {
    if let Some(airport_id) = input.airport_id {
        ensure_reference(
            AirportRepo::exists(&state.pool, airport_id).await?,
            "Airport",
            airport_id,
        )?;
    }
    let terminal = TerminalRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Terminal", id))?;
    tracing::info!(terminal_id = id, user_id = principal.id, "Terminal updated");
    Ok(Json(terminal))
}

/// DELETE /api/terminal/{id}
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !TerminalRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Terminal", id));
    }
    TerminalRepo::delete_guard(&state.pool, id).await?.check()?;

    if TerminalRepo::delete(&state.pool, id).await? {
        tracing::info!(terminal_id = id, user_id = principal.id, "Terminal deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Terminal", id))
    }
}
