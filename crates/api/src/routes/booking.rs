//! Routes for passengers, tickets and check-ins.

use axum::routing::get;
use axum::Router;

use super::resource;
use crate::handlers::{checkin, passenger, ticket};
use crate::state::AppState;

/// ```text
/// /passenger   /passenger/{id}
/// /ticket      /ticket/{id}
/// /checkin     /checkin/{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .nest(
            "/passenger",
            resource(
                get(passenger::list).post(passenger::create),
                get(passenger::get_by_id)
                    .patch(passenger::update)
                    .delete(passenger::delete),
            ),
        )
        .nest(
            "/ticket",
            resource(
                get(ticket::list).post(ticket::create),
                get(ticket::get_by_id)
                    .patch(ticket::update)
                    .delete(ticket::delete),
            ),
        )
        .nest(
            "/checkin",
            resource(
                get(checkin::list).post(checkin::create),
                get(checkin::get_by_id)
                    .patch(checkin::update)
                    .delete(checkin::delete),
            ),
        )
}
