//! Admin-only routes. Every handler here takes `RequireAdmin`.

use axum::routing::get;
use axum::Router;

use super::resource;
use crate::handlers::{incident, maintenance, user};
use crate::state::AppState;

/// ```text
/// /incident      /incident/{id}
/// /maintenance   /maintenance/{id}
/// /users         /users/{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .nest(
            "/incident",
            resource(
                get(incident::list).post(incident::create),
                get(incident::get_by_id)
                    .patch(incident::update)
                    .delete(incident::delete),
            ),
        )
        .nest(
            "/maintenance",
            resource(
                get(maintenance::list).post(maintenance::create),
                get(maintenance::get_by_id)
                    .patch(maintenance::update)
                    .delete(maintenance::delete),
            ),
        )
        .nest(
            "/users",
            resource(
                get(user::list).post(user::create),
                get(user::get_by_id).patch(user::update).delete(user::delete),
            ),
        )
}
