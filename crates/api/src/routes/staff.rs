//! Routes for personnel and flight crews.

use axum::routing::get;
use axum::Router;

use super::resource;
use crate::handlers::{crew, personnel};
use crate::state::AppState;

/// ```text
/// /personnel   /personnel/{id}
/// /crew        /crew/{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .nest(
            "/personnel",
            resource(
                get(personnel::list).post(personnel::create),
                get(personnel::get_by_id)
                    .patch(personnel::update)
                    .delete(personnel::delete),
            ),
        )
        .nest(
            "/crew",
            resource(
                get(crew::list).post(crew::create),
                get(crew::get_by_id).patch(crew::update).delete(crew::delete),
            ),
        )
}
