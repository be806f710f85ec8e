//! Handlers for the `/crew` resource.
//!
//! A crew and its member list are written as one unit, mirroring the
//! check-in/baggage write.

use aerodesk_core::crew::{ensure_flight_free, ensure_personnel_exist, validate_member_ids};
use aerodesk_core::types::DbId;
use aerodesk_db::models::crew::{personnel_ids, CreateCrew, CrewWithMembers, NewCrewMember, UpdateCrew};
use aerodesk_db::repositories::{CrewRepo, FlightRepo, PersonnelRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_reference;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidJson};
use crate::middleware::auth::Principal;
use crate::state::AppState;

/// Every member must name a distinct, existing person.
async fn check_members(state: &AppState, members: &[NewCrewMember]) -> AppResult<()> {
    let requested = personnel_ids(members);
    validate_member_ids(&requested)?;
    let found = PersonnelRepo::existing_ids(&state.pool, &requested).await?;
    ensure_personnel_exist(&requested, &found)?;
    Ok(())
}

async fn ensure_flight_available(
    state: &AppState,
    flight_id: DbId,
    current: Option<DbId>,
) -> AppResult<()> {
    ensure_reference(
        FlightRepo::exists(&state.pool, flight_id).await?,
        "Flight",
        flight_id,
    )?;
    let holder = CrewRepo::find_id_by_flight(&state.pool, flight_id).await?;
    ensure_flight_free(flight_id, holder, current)?;
    Ok(())
}

/// POST /api/crew
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreateCrew>,
) -> AppResult<(StatusCode, Json<CrewWithMembers>)> {
    ensure_flight_available(&state, input.flight_id, None).await?;
    check_members(&state, &input.members).await?;

    let crew = CrewRepo::create(&state.pool, input.flight_id, &input.members).await?;
    tracing::info!(
        crew_id = crew.crew.id,
        flight_id = input.flight_id,
        members = crew.members.len(),
        user_id = principal.id,
        "Crew created"
    );
    Ok((StatusCode::CREATED, Json(crew)))
}

/// GET /api/crew
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CrewWithMembers>>> {
    Ok(Json(CrewRepo::list(&state.pool).await?))
}

/// GET /api/crew/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<CrewWithMembers>> {
    let crew = CrewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Crew", id))?;
    Ok(Json(crew))
}

/// PATCH /api/crew/{id}
///
/// A supplied `members` list replaces the stored one in full.
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateCrew>,
) -> AppResult<Json<CrewWithMembers>> {
    if CrewRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::not_found("Crew", id));
    }
    if let Some(flight_id) = input.flight_id {
        ensure_flight_available(&state, flight_id, Some(id)).await?;
    }
    if let Some(members) = &input.members {
        check_members(&state, members).await?;
    }

    let crew = CrewRepo::update(&state.pool, id, input.flight_id, input.members.as_deref())
        .await?
        .ok_or(AppError::not_found("Crew", id))?;
    tracing::info!(
        crew_id = id,
        members = crew.members.len(),
        user_id = principal.id,
        "Crew updated"
    );
    Ok(Json(crew))
}

/// DELETE /api/crew/{id}
///
/// Removes the crew together with its member assignments.
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if CrewRepo::delete(&state.pool, id).await? {
        tracing::info!(crew_id = id, user_id = principal.id, "Crew deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Crew", id))
    }
}
