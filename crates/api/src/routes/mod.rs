pub mod admin;
pub mod airport;
pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod fleet;
pub mod health;
pub mod staff;

use axum::routing::MethodRouter;
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/logout                     logout (public)
/// /auth/session                    current user
///
/// /dashboard                       summary
///
/// /airport, /terminal, /gate, /stand
/// /airline, /aircraft-type, /aircraft, /flight
/// /passenger, /ticket, /checkin
/// /personnel, /crew                collection: GET, POST
///                                  item /{id}: GET, PATCH, DELETE
///
/// /incident, /maintenance, /users  same shape, admin only
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dashboard", dashboard::router())
        .merge(airport::router())
        .merge(fleet::router())
        .merge(booking::router())
        .merge(staff::router())
        .merge(admin::router())
}

/// A collection route (`/`) plus an item route (`/{id}`).
pub(crate) fn resource(
    collection: MethodRouter<AppState>,
    item: MethodRouter<AppState>,
) -> Router<AppState> {
    Router::new().route("/", collection).route("/{id}", item)
}
