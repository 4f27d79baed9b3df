#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use reelcraft_api::config::{ServerConfig, TrendConfig, TrendSourceKind};
use reelcraft_api::router::build_app_router;
use reelcraft_api::state::{build_trend_source, AppState};
use reelcraft_trends::{TrendSource, DEFAULT_FEED_URL};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// the `IN` and `US` regions, and a fixed generator seed.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        trends: TrendConfig {
            source: TrendSourceKind::Offline,
            feed_url: DEFAULT_FEED_URL.to_string(),
            regions: vec!["IN".to_string(), "US".to_string()],
            fetch_timeout_secs: 1,
            max_titles_per_region: 20,
        },
        generator_seed: Some(7),
    }
}

/// Build the full application router (same middleware stack as
/// production) around the given trend source.
pub fn build_test_app(source: impl TrendSource + 'static) -> Router {
    build_test_app_with(test_config(), source)
}

pub fn build_test_app_with(config: ServerConfig, source: impl TrendSource + 'static) -> Router {
    build_app_router(AppState::new(config, Arc::new(source)))
}

/// Build the router with the trend source chosen by `config.trends`, as
/// `main` does.
pub fn build_configured_app(config: ServerConfig) -> Router {
    let source = build_trend_source(&config.trends).unwrap();
    build_app_router(AppState::new(config, source))
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
