//! Route-level tests against the in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use register_api::build_router;
use register_db::MemoryConfigStore;
use register_settings::SettingsService;

fn router() -> Router {
    let settings = SettingsService::new(Arc::new(MemoryConfigStore::new()));
    build_router(Arc::new(settings))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn put(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = router();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn rbac_get_returns_defaults() {
    let app = router();
    let (status, body) = send(&app, get("/api/settings/rbac")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enabled"], json!(false));
    assert_eq!(body["anonymousGroup"], json!("public"));
}

#[tokio::test]
async fn rbac_put_replaces_document() {
    let app = router();
    let (status, body) = send(
        &app,
        put("/api/settings/rbac", json!({"enabled": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enabled"], json!(true));

    let (_, read) = send(&app, get("/api/settings/rbac")).await;
    assert_eq!(read["enabled"], json!(true));
}

#[tokio::test]
async fn llm_put_merges_document() {
    let app = router();
    send(
        &app,
        put(
            "/api/settings/llm",
            json!({"openaiConfig": {"apiKey": "sk-route"}}),
        ),
    )
    .await;
    let (status, body) = send(
        &app,
        put("/api/settings/llm", json!({"chatProvider": "ollama"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chatProvider"], json!("ollama"));
    assert_eq!(body["openaiConfig"]["apiKey"], json!("sk-route"));
}

#[tokio::test]
async fn invalid_backend_selection_returns_bad_request() {
    let app = router();
    let (status, body) = send(
        &app,
        put("/api/settings/search-backend", json!({"backend": "lucene"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid search backend: lucene"));
}

#[tokio::test]
async fn valid_backend_selection_persists() {
    let app = router();
    let (status, body) = send(
        &app,
        put(
            "/api/settings/search-backend",
            json!({"backend": "elasticsearch"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], json!("elasticsearch"));

    let (_, read) = send(&app, get("/api/settings/search-backend")).await;
    assert_eq!(read["active"], json!("elasticsearch"));
}

#[tokio::test]
async fn group_search_without_directory_is_service_unavailable() {
    let app = router();
    let (status, body) = send(&app, get("/api/settings/rbac/groups?search=admin")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("group directory"));
}

#[tokio::test]
async fn organisations_degrade_to_empty_list() {
    let app = router();
    let (status, body) = send(&app, get("/api/settings/organisations")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn dashboard_renders_when_solr_disabled() {
    let app = router();
    let (status, body) = send(&app, get("/api/dashboard/search")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overview"]["available"], json!(false));
    assert_eq!(body["error"], json!("SOLR integration is disabled"));
}

#[tokio::test]
async fn facets_put_normalizes_input() {
    let app = router();
    let (status, body) = send(
        &app,
        put(
            "/api/settings/facets",
            json!({"facets": {"status": {"order": "2"}, "": {"title": "x"}}}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["facets"]["status"]["order"], json!(2));
    assert!(body["facets"].get("").is_none());
}
