//! # register-api
//!
//! HTTP API server for the OpenRegister settings service.
//!
//! Thin axum layer over [`register_settings::SettingsService`]: route
//! definitions, request extraction, and error-to-status mapping live here;
//! all settings semantics live in the service crate.

use std::sync::Arc;

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use register_settings::SettingsService;

pub mod error;
pub mod handlers;

pub use error::ApiError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<SettingsService>,
}

/// Build the API router.
pub fn build_router(settings: Arc<SettingsService>) -> Router {
    let state = AppState { settings };

    Router::new()
        .route(
            "/api/settings/rbac",
            get(handlers::settings::get_rbac).put(handlers::settings::update_rbac),
        )
        .route("/api/settings/rbac/groups", get(handlers::directory::search_groups))
        .route("/api/settings/rbac/users", get(handlers::directory::search_users))
        .route(
            "/api/settings/multitenancy",
            get(handlers::settings::get_tenancy).put(handlers::settings::update_tenancy),
        )
        .route(
            "/api/settings/organisations",
            get(handlers::directory::list_organisations),
        )
        .route(
            "/api/settings/retention",
            get(handlers::settings::get_retention).put(handlers::settings::update_retention),
        )
        .route(
            "/api/settings/solr",
            get(handlers::settings::get_solr).put(handlers::settings::update_solr),
        )
        .route(
            "/api/settings/llm",
            get(handlers::settings::get_llm).put(handlers::settings::update_llm),
        )
        .route(
            "/api/settings/files",
            get(handlers::settings::get_files).put(handlers::settings::update_files),
        )
        .route(
            "/api/settings/n8n",
            get(handlers::settings::get_n8n).put(handlers::settings::update_n8n),
        )
        .route(
            "/api/settings/objects",
            get(handlers::settings::get_objects).put(handlers::settings::update_objects),
        )
        .route(
            "/api/settings/search-backend",
            get(handlers::settings::get_search_backend)
                .put(handlers::settings::set_search_backend),
        )
        .route(
            "/api/settings/facets",
            get(handlers::settings::get_facets).put(handlers::settings::update_facets),
        )
        .route("/api/dashboard/search", get(handlers::dashboard::search_stats))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
