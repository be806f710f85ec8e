//! Handlers for the `/incident` resource. Admin only.

use aerodesk_core::pagination::Paginated;
use aerodesk_core::types::DbId;
use aerodesk_db::models::incident::{CreateIncident, Incident, UpdateIncident};
use aerodesk_db::repositories::{FlightRepo, IncidentRepo, PersonnelRepo};
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
    flight_id: Option<DbId>,
    personnel_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(id) = flight_id {
        ensure_reference(FlightRepo::exists(&state.pool, id).await?, "Flight", id)?;
    }
    if let Some(id) = personnel_id {
        ensure_reference(PersonnelRepo::exists(&state.pool, id).await?, "Personnel", id)?;
    }
    Ok(())
}

/// POST /api/incident
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(input): ValidJson<CreateIncident>,
) -> AppResult<(StatusCode, Json<Incident>)> {
    check_references(&state, input.flight_id, input.personnel_id).await?;
    let incident = IncidentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        incident_id = incident.id,
        severity = %incident.severity,
        user_id = admin.id,
        "Incident recorded"
    );
    Ok((StatusCode::CREATED, Json(incident)))
}

/// GET /api/incident?page=&limit=
///
/// Latest incidents first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<Paginated<Incident>>> {
    let page = params.page();
    let (items, total) = IncidentRepo::list_page(&state.pool, page).await?;
    Ok(Json(Paginated::new(items, total, page)))
}

/// GET /api/incident/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Incident>> {
    let incident = IncidentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Incident", id))?;
    Ok(Json(incident))
}

/// PATCH /api/incident/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateIncident>,
) -> AppResult<Json<Incident>> {
    check_references(&state, input.flight_id.flatten(), input.personnel_id.flatten()).await?;
    let incident = IncidentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Incident", id))?;
    tracing::info!(incident_id = id, user_id = admin.id, "Incident updated");
    Ok(Json(incident))
}

/// DELETE /api/incident/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if IncidentRepo::delete(&state.pool, id).await? {
        tracing::info!(incident_id = id, user_id = admin.id, "Incident deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Incident", id))
    }
}
