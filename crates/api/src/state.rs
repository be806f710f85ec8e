use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: aerodesk_db::DbPool,
    /// Immutable server configuration (JWT secret, cookie policy, static dir).
    pub config: Arc<ServerConfig>,
}
