//! Identity directory handlers for the RBAC and tenancy screens.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use register_core::{GroupInfo, Organisation, UserInfo};

use crate::error::ApiError;
use crate::AppState;

/// Default cap on user search results.
const DEFAULT_USER_LIMIT: i64 = 25;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
    pub limit: Option<i64>,
}

pub async fn search_groups(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<GroupInfo>>, ApiError> {
    Ok(Json(state.settings.search_groups(&query.search).await?))
}

pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<UserInfo>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_USER_LIMIT);
    Ok(Json(state.settings.search_users(&query.search, limit).await?))
}

pub async fn list_organisations(State(state): State<AppState>) -> Json<Vec<Organisation>> {
    Json(state.settings.list_organisations().await)
}
