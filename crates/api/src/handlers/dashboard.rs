//! Handler for the dashboard summary.

use aerodesk_db::models::dashboard::DashboardSummary;
use aerodesk_db::repositories::DashboardRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard
///
/// Counts, status/severity breakdowns and the short lists shown on the
/// landing page.
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    Ok(Json(DashboardRepo::summary(&state.pool).await?))
}
