//! Settings domain handlers.

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;

use register_core::models::{
    FacetConfig, FilesConfig, FilesUpdate, LlmConfig, LlmUpdate, N8nConfig, N8nUpdate,
    ObjectsConfig, ObjectsUpdate, RbacConfig, RbacUpdate, RetentionConfig, RetentionUpdate,
    SearchBackendConfig, SolrConfig, SolrUpdate, TenancyConfig, TenancyUpdate,
};

use crate::error::ApiError;
use crate::AppState;

pub async fn get_rbac(State(state): State<AppState>) -> Result<Json<RbacConfig>, ApiError> {
    Ok(Json(state.settings.get_rbac().await?))
}

pub async fn update_rbac(
    State(state): State<AppState>,
    Json(update): Json<RbacUpdate>,
) -> Result<Json<RbacConfig>, ApiError> {
    Ok(Json(state.settings.update_rbac(update).await?))
}

pub async fn get_tenancy(State(state): State<AppState>) -> Result<Json<TenancyConfig>, ApiError> {
    Ok(Json(state.settings.get_tenancy().await?))
}

pub async fn update_tenancy(
    State(state): State<AppState>,
    Json(update): Json<TenancyUpdate>,
) -> Result<Json<TenancyConfig>, ApiError> {
    Ok(Json(state.settings.update_tenancy(update).await?))
}

pub async fn get_retention(
    State(state): State<AppState>,
) -> Result<Json<RetentionConfig>, ApiError> {
    Ok(Json(state.settings.get_retention().await?))
}

pub async fn update_retention(
    State(state): State<AppState>,
    Json(update): Json<RetentionUpdate>,
) -> Result<Json<RetentionConfig>, ApiError> {
    Ok(Json(state.settings.update_retention(update).await?))
}

pub async fn get_solr(State(state): State<AppState>) -> Result<Json<SolrConfig>, ApiError> {
    Ok(Json(state.settings.get_solr().await?))
}

pub async fn update_solr(
    State(state): State<AppState>,
    Json(update): Json<SolrUpdate>,
) -> Result<Json<SolrConfig>, ApiError> {
    Ok(Json(state.settings.update_solr(update).await?))
}

pub async fn get_llm(State(state): State<AppState>) -> Result<Json<LlmConfig>, ApiError> {
    Ok(Json(state.settings.get_llm().await?))
}

pub async fn update_llm(
    State(state): State<AppState>,
    Json(update): Json<LlmUpdate>,
) -> Result<Json<LlmConfig>, ApiError> {
    Ok(Json(state.settings.update_llm(update).await?))
}

pub async fn get_files(State(state): State<AppState>) -> Result<Json<FilesConfig>, ApiError> {
    Ok(Json(state.settings.get_files().await?))
}

pub async fn update_files(
    State(state): State<AppState>,
    Json(update): Json<FilesUpdate>,
) -> Result<Json<FilesConfig>, ApiError> {
    Ok(Json(state.settings.update_files(update).await?))
}

pub async fn get_n8n(State(state): State<AppState>) -> Result<Json<N8nConfig>, ApiError> {
    Ok(Json(state.settings.get_n8n().await?))
}

pub async fn update_n8n(
    State(state): State<AppState>,
    Json(update): Json<N8nUpdate>,
) -> Result<Json<N8nConfig>, ApiError> {
    Ok(Json(state.settings.update_n8n(update).await?))
}

pub async fn get_objects(State(state): State<AppState>) -> Result<Json<ObjectsConfig>, ApiError> {
    Ok(Json(state.settings.get_objects().await?))
}

pub async fn update_objects(
    State(state): State<AppState>,
    Json(update): Json<ObjectsUpdate>,
) -> Result<Json<ObjectsConfig>, ApiError> {
    Ok(Json(state.settings.update_objects(update).await?))
}

pub async fn get_search_backend(
    State(state): State<AppState>,
) -> Result<Json<SearchBackendConfig>, ApiError> {
    Ok(Json(state.settings.get_search_backend().await?))
}

#[derive(Debug, Deserialize)]
pub struct SelectBackendRequest {
    pub backend: String,
}

pub async fn set_search_backend(
    State(state): State<AppState>,
    Json(req): Json<SelectBackendRequest>,
) -> Result<Json<SearchBackendConfig>, ApiError> {
    Ok(Json(state.settings.set_search_backend(&req.backend).await?))
}

pub async fn get_facets(State(state): State<AppState>) -> Result<Json<FacetConfig>, ApiError> {
    Ok(Json(state.settings.get_facets().await?))
}

pub async fn update_facets(
    State(state): State<AppState>,
    Json(input): Json<Value>,
) -> Result<Json<FacetConfig>, ApiError> {
    Ok(Json(state.settings.update_facets(&input).await?))
}
