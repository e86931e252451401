#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use projectdesk_api::config::ServerConfig;
use projectdesk_api::router::build_app_router;
use projectdesk_api::state::AppState;
use projectdesk_core::types::parse_timestamp;
use projectdesk_store::DataStore;

/// Wednesday, 2025-03-12, 15:00 -- two days after the newest seed comment.
pub const TEST_NOW: &str = "2025-03-12T15:00:00";

/// Build a test `ServerConfig` with safe defaults and a pinned clock.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        now_override: parse_timestamp(TEST_NOW),
    }
}

/// Build the full application router over the seeded sample data.
pub fn build_test_app() -> Router {
    build_test_app_with(DataStore::seeded())
}

/// Build the full application router over a caller-supplied store.
pub fn build_test_app_with(store: DataStore) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// Build an app and return its state too, for tests that make several
/// requests against the same store.
pub fn build_shared_app() -> (Router, AppState) {
    let config = test_config();
    let state = AppState::new(DataStore::seeded(), config.clone());
    (build_app_router(state.clone(), &config), state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
