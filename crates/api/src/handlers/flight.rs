//! Handlers for the `/flight` resource.
//!
//! Creates and updates enforce the flight consistency rules from
//! [`aerodesk_core::flight`]. Updates are checked against the merged record
//! so a partial patch cannot leave a stored flight inconsistent.

use aerodesk_core::flight::{duplicate_flight_number, validate_schedule};
use aerodesk_core::types::{DbId, Timestamp};
use aerodesk_db::models::flight::{CreateFlight, Flight, UpdateFlight};
use aerodesk_db::repositories::{
    AircraftRepo, AirlineRepo, AirportRepo, FlightRepo, GateRepo, StandRepo,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ensure_reference;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidJson};
use crate::middleware::auth::Principal;
use crate::query::FlightListParams;
use crate::state::AppState;

/// Referenced ids of a flight write. `None` means "not supplied".
struct FlightRefs {
    departure_airport_id: Option<DbId>,
    arrival_airport_id: Option<DbId>,
    aircraft_id: Option<DbId>,
    airline_id: Option<DbId>,
    gate_id: Option<DbId>,
    stand_id: Option<DbId>,
}

async fn check_references(state: &AppState, refs: FlightRefs) -> AppResult<()> {
    let pool = &state.pool;
    for airport_id in [refs.departure_airport_id, refs.arrival_airport_id]
        .into_iter()
        .flatten()
    {
        ensure_reference(
            AirportRepo::exists(pool, airport_id).await?,
            "Airport",
            airport_id,
        )?;
    }
    if let Some(id) = refs.aircraft_id {
        ensure_reference(AircraftRepo::exists(pool, id).await?, "Aircraft", id)?;
    }
    if let Some(id) = refs.airline_id {
        ensure_reference(AirlineRepo::exists(pool, id).await?, "Airline", id)?;
    }
    if let Some(id) = refs.gate_id {
        ensure_reference(GateRepo::exists(pool, id).await?, "Gate", id)?;
    }
    if let Some(id) = refs.stand_id {
        ensure_reference(StandRepo::exists(pool, id).await?, "Stand", id)?;
    }
    Ok(())
}

async fn ensure_number_free_that_day(
    state: &AppState,
    flight_number: &str,
    departure: Timestamp,
    current: Option<DbId>,
) -> AppResult<()> {
    let duplicate =
        FlightRepo::find_same_day_duplicate(&state.pool, flight_number, departure, current)
            .await?;
    match duplicate {
        Some(_) => Err(duplicate_flight_number(flight_number, departure).into()),
        None => Ok(()),
    }
}

/// POST /api/flight
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ValidJson(input): ValidJson<CreateFlight>,
) -> AppResult<(StatusCode, Json<Flight>)> {
    validate_schedule(&input.schedule())?;
    check_references(
        &state,
        FlightRefs {
            departure_airport_id: Some(input.departure_airport_id),
            arrival_airport_id: Some(input.arrival_airport_id),
            aircraft_id: input.aircraft_id,
            airline_id: input.airline_id,
            gate_id: input.gate_id,
            stand_id: input.stand_id,
        },
    )
    .await?;
    ensure_number_free_that_day(&state, &input.flight_number, input.scheduled_departure, None)
        .await?;

    let flight = FlightRepo::create(&state.pool, &input).await?;
    tracing::info!(
        flight_id = flight.id,
        flight_number = %flight.flight_number,
        user_id = principal.id,
        "Flight created"
    );
    Ok((StatusCode::CREATED, Json(flight)))
}

/// GET /api/flight?date=YYYY-MM-DD&status=&airline_id=
///
/// `date` matches flights departing or arriving that UTC day. Filters
/// combine with AND; results are ordered by scheduled departure.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<FlightListParams>,
) -> AppResult<Json<Vec<Flight>>> {
    let filter = params.filter()?;
    Ok(Json(FlightRepo::list(&state.pool, &filter).await?))
}

/// GET /api/flight/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Flight>> {
    let flight = FlightRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Flight", id))?;
    Ok(Json(flight))
}

/// PATCH /api/flight/{id}
pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateFlight>,
) -> AppResult<Json<Flight>> {
    let stored = FlightRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Flight", id))?;

    let merged = stored.merged(&input);
    validate_schedule(&merged.schedule())?;
    check_references(
        &state,
        FlightRefs {
            departure_airport_id: input.departure_airport_id,
            arrival_airport_id: input.arrival_airport_id,
            aircraft_id: input.aircraft_id.flatten(),
            airline_id: input.airline_id.flatten(),
            gate_id: input.gate_id.flatten(),
            stand_id: input.stand_id.flatten(),
        },
    )
    .await?;
    ensure_number_free_that_day(
        &state,
        &merged.flight_number,
        merged.scheduled_departure,
        Some(id),
    )
    .await?;

    let flight = FlightRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Flight", id))?;
    tracing::info!(flight_id = id, status = %flight.status, user_id = principal.id, "Flight updated");
    Ok(Json(flight))
}

/// DELETE /api/flight/{id}
///
/// Refused while tickets, a crew or incidents reference the flight.
pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !FlightRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Flight", id));
    }
    FlightRepo::delete_guard(&state.pool, id).await?.check()?;

    if FlightRepo::delete(&state.pool, id).await? {
        tracing::info!(flight_id = id, user_id = principal.id, "Flight deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Flight", id))
    }
}
