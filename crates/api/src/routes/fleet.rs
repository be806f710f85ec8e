//! Routes for airlines, aircraft and flights.

use axum::routing::get;
use axum::Router;

use super::resource;
use crate::handlers::{aircraft, aircraft_type, airline, flight};
use crate::state::AppState;

/// ```text
/// /airline         /airline/{id}
/// /aircraft-type   /aircraft-type/{id}
/// /aircraft        /aircraft/{id}
/// /flight          /flight/{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .nest(
            "/airline",
            resource(
                get(airline::list).post(airline::create),
                get(airline::get_by_id)
                    .patch(airline::update)
                    .delete(airline::delete),
            ),
        )
        .nest(
            "/aircraft-type",
            resource(
                get(aircraft_type::list).post(aircraft_type::create),
                get(aircraft_type::get_by_id)
                    .patch(aircraft_type::update)
                    .delete(aircraft_type::delete),
            ),
        )
        .nest(
            "/aircraft",
            resource(
                get(aircraft::list).post(aircraft::create),
                get(aircraft::get_by_id)
                    .patch(aircraft::update)
                    .delete(aircraft::delete),
            ),
        )
        .nest(
            "/flight",
            resource(
                get(flight::list).post(flight::create),
                get(flight::get_by_id)
                    .patch(flight::update)
                    .delete(flight::delete),
            ),
        )
}
