//! Handlers for the `/personnel` resource.

use aerodesk_core::types::DbId;
use aerodesk_db::models::personnel::{CreatePersonnel, Personnel, UpdatePersonnel};
use aerodesk_db::repositories::PersonnelRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_unique;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidJson};
use crate::middleware::auth::Principal;
use crate::state::AppState;

/// License numbers are optional; only a non-blank one must be unique.
async fn ensure_license_free(
    state: &AppState,
    license_number: Option<&str>,
    current: Option<DbId>,
) -> AppResult<()> {
    let Some(license) = license_number.map(str::trim).filter(|l| !l.is_empty()) else {
        return Ok(());
    };
    let holder = PersonnelRepo::find_by_license(&state.pool, license).await?;
    ensure_unique(holder.map(|p| p.id), current, || {
        format!("Personnel with license number {license} already exists")
    })
}

/// POST /api/personnel
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreatePersonnel>,
) -> AppResult<(StatusCode, Json<Personnel>)> {
    ensure_license_free(&state, input.license_number.as_deref(), None).await?;
    let personnel = PersonnelRepo::create(&state.pool, &input).await?;
    tracing::info!(personnel_id = personnel.id, user_id = principal.id, "Personnel created");
    Ok((StatusCode::CREATED, Json(personnel)))
}

/// GET /api/personnel
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Personnel>>> {
    Ok(Json(PersonnelRepo::list(&state.pool).await?))
}

/// GET /api/personnel/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Personnel>> {
    let personnel = PersonnelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Personnel", id))?;
    Ok(Json(personnel))
}

/// PATCH /api/personnel/{id}
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdatePersonnel>,
) -> AppResult<Json<Personnel>> {
    let license = input.license_number.as_ref().and_then(Option::as_deref);
    ensure_license_free(&state, license, Some(id)).await?;
    let personnel = PersonnelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Personnel", id))?;
    tracing::info!(personnel_id = id, user_id = principal.id, "Personnel updated");
    Ok(Json(personnel))
}

/// DELETE /api/personnel/{id}
///
/// Refused while the person is on a crew, named on maintenance records, or
/// linked to incidents.
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !PersonnelRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Personnel", id));
    }
    PersonnelRepo::delete_guard(&state.pool, id).await?.check()?;

    if PersonnelRepo::delete(&state.pool, id).await? {
        tracing::info!(personnel_id = id, user_id = principal.id, "Personnel deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Personnel", id))
    }
}
