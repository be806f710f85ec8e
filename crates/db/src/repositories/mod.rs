//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Deletes are hard deletes;
//! callers consult the repository's `delete_guard` first.

use aerodesk_core::types::DbId;
use sqlx::postgres::PgExecutor;

pub mod aircraft_repo;
pub mod aircraft_type_repo;
pub mod airline_repo;
pub mod airport_repo;
pub mod checkin_repo;
pub mod crew_repo;
pub mod dashboard_repo;
pub mod flight_repo;
pub mod gate_repo;
pub mod incident_repo;
pub mod maintenance_repo;
pub mod passenger_repo;
pub mod personnel_repo;
pub mod stand_repo;
pub mod terminal_repo;
pub mod ticket_repo;
pub mod user_repo;

pub use aircraft_repo::AircraftRepo;
pub use aircraft_type_repo::AircraftTypeRepo;
pub use airline_repo::AirlineRepo;
pub use airport_repo::AirportRepo;
pub use checkin_repo::CheckinRepo;
pub use crew_repo::CrewRepo;
pub use dashboard_repo::DashboardRepo;
pub use flight_repo::FlightRepo;
pub use gate_repo::GateRepo;
pub use incident_repo::IncidentRepo;
pub use maintenance_repo::MaintenanceRepo;
pub use passenger_repo::PassengerRepo;
pub use personnel_repo::PersonnelRepo;
pub use stand_repo::StandRepo;
pub use terminal_repo::TerminalRepo;
pub use ticket_repo::TicketRepo;
pub use user_repo::UserRepo;

/// Whether a row with the given id exists in `table`.
///
/// `table` is always a compile-time table name, never user input.
pub(crate) async fn row_exists<'e, E>(executor: E, table: &str, id: DbId) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = $1)");
    sqlx::query_scalar::<_, bool>(&query)
        .bind(id)
        .fetch_one(executor)
        .await
}

/// Number of rows in `table` whose `column` references `id`.
pub(crate) async fn count_referencing<'e, E>(
    executor: E,
    table: &str,
    column: &str,
    id: DbId,
) -> Result<i64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!("SELECT COUNT(*) FROM {table} WHERE {column} = $1");
    sqlx::query_scalar::<_, i64>(&query)
        .bind(id)
        .fetch_one(executor)
        .await
}

/// Hard-delete a row by id. Returns `true` if a row was removed.
pub(crate) async fn delete_row<'e, E>(executor: E, table: &str, id: DbId) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!("DELETE FROM {table} WHERE id = $1");
    let result = sqlx::query(&query).bind(id).execute(executor).await?;
    Ok(result.rows_affected() > 0)
}
