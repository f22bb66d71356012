//! Dashboard handlers.

use axum::extract::State;
use axum::response::Json;

use register_core::models::DashboardStats;

use crate::error::ApiError;
use crate::AppState;

pub async fn search_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, ApiError> {
    Ok(Json(state.settings.dashboard_stats().await?))
}
