#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::http::header::CONTENT_TYPE;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tracker_api::config::{LogFormat, ServerConfig, StoreBackend};
use tracker_api::router::build_app_router;
use tracker_api::state::AppState;
use tracker_db::{MemoryProjectStore, ProjectStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        store: StoreBackend::Memory,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router over `store`.
///
/// Uses the same builder as `main.rs`, so integration tests exercise the
/// production middleware stack.
pub fn build_test_app(store: Arc<dyn ProjectStore>) -> Router {
    let config = test_config();
    let state = AppState { store };
    build_app_router(state, &config)
}

/// A fresh, empty in-memory store.
pub fn memory_store() -> Arc<dyn ProjectStore> {
    Arc::new(MemoryProjectStore::new())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project through the API and return its JSON representation.
pub async fn seed(store: &Arc<dyn ProjectStore>, body: serde_json::Value) -> serde_json::Value {
    let app = build_test_app(Arc::clone(store));
    let response = post_json(app, "/api/v1/projects/new-project", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["project"].clone()
}
