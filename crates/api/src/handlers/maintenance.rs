//! Handlers for the `/maintenance` resource. Admin only.

use aerodesk_core::maintenance::validate_window;
use aerodesk_core::pagination::Paginated;
use aerodesk_core::types::DbId;
use aerodesk_db::models::maintenance::{CreateMaintenance, Maintenance, UpdateMaintenance};
use aerodesk_db::repositories::{AircraftRepo, MaintenanceRepo, PersonnelRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_reference;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidJson};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PageParams;
use crate::state::AppState;

async fn check_references(
    state: &AppState,
    aircraft_id: Option<DbId>,
    personnel_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(id) = aircraft_id {
        ensure_reference(AircraftRepo::exists(&state.pool, id).await?, "Aircraft", id)?;
    }
    if let Some(id) = personnel_id {
        ensure_reference(PersonnelRepo::exists(&state.pool, id).await?, "Personnel", id)?;
    }
    Ok(())
}

/// POST /api/maintenance
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(input): ValidJson<CreateMaintenance>,
) -> AppResult<(StatusCode, Json<Maintenance>)> {
    validate_window(input.start_time, input.end_time)?;
    check_references(&state, Some(input.aircraft_id), Some(input.personnel_id)).await?;
    let record = MaintenanceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        maintenance_id = record.id,
        aircraft_id = record.aircraft_id,
        user_id = admin.id,
        "Maintenance recorded"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/maintenance?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<Paginated<Maintenance>>> {
    let page = params.page();
    let (items, total) = MaintenanceRepo::list_page(&state.pool, page).await?;
    Ok(Json(Paginated::new(items, total, page)))
}

/// GET /api/maintenance/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Maintenance>> {
    let record = MaintenanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Maintenance record", id))?;
    Ok(Json(record))
}

/// PATCH /api/maintenance/{id}
///
/// The window is re-checked on the merged record.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateMaintenance>,
) -> AppResult<Json<Maintenance>> {
    let stored = MaintenanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Maintenance record", id))?;
    validate_window(
        input.start_time.unwrap_or(stored.start_time),
        input.end_time.unwrap_or(stored.end_time),
    )?;
    check_references(&state, input.aircraft_id, input.personnel_id).await?;

    let record = MaintenanceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Maintenance record", id))?;
    tracing::info!(maintenance_id = id, user_id = admin.id, "Maintenance updated");
    Ok(Json(record))
}

/// DELETE /api/maintenance/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if MaintenanceRepo::delete(&state.pool, id).await? {
        tracing::info!(maintenance_id = id, user_id = admin.id, "Maintenance deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Maintenance record", id))
    }
}
