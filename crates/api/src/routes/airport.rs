//! Routes for airports and the facilities that belong to them.

use axum::routing::get;
use axum::Router;

use super::resource;
use crate::handlers::{airport, gate, stand, terminal};
use crate::state::AppState;

/// ```text
/// /airport    /airport/{id}
/// /terminal   /terminal/{id}
/// /gate       /gate/{id}
/// /stand      /stand/{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .nest(
            "/airport",
            resource(
                get(airport::list).post(airport::create),
                get(airport::get_by_id)
                    .patch(airport::update)
                    .delete(airport::delete),
            ),
        )
        .nest(
            "/terminal",
            resource(
                get(terminal::list).post(terminal::create),
                get(terminal::get_by_id)
                    .patch(terminal::update)
                    .delete(terminal::delete),
            ),
        )
        .nest(
            "/gate",
            resource(
                get(gate::list).post(gate::create),
                get(gate::get_by_id).patch(gate::update).delete(gate::delete),
            ),
        )
        .nest(
            "/stand",
            resource(
                get(stand::list).post(stand::create),
                get(stand::get_by_id).patch(stand::update).delete(stand::delete),
            ),
        )
}
