#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use favorites_api::config::ServerConfig;
use favorites_api::router::build_app_router;
use favorites_api::state::AppState;
use favorites_core::assets::{Asset, AssetBase, Audience, Chart, Insight};
use favorites_core::catalog::Catalog;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        catalog_seed_path: PathBuf::from("unused.json"),
        version: "test".to_string(),
    }
}

/// The catalog most tests start from: one asset of each kind.
pub async fn fixture_catalog() -> Arc<Catalog> {
    let catalog = Arc::new(Catalog::new());
    let assets = [
        Asset::Chart(Chart {
            base: AssetBase::new("chart-2024", "Revenue 2024").with_description("Q1-Q4 Revenue"),
            chart_type: "bar".into(),
            data_source: Some("Sales DB".into()),
        }),
        Asset::Insight(Insight {
            base: AssetBase::new("insight-growth", "Growth Insight").with_description("Yearly growth"),
            metric: "Growth".into(),
            value: "15%".into(),
        }),
        Asset::Audience(Audience {
            base: AssetBase::new("audience-genz", "Gen Z Females"),
            segment: "Females 18-24".into(),
            size: 12000,
        }),
    ];
    for asset in assets {
        catalog.insert(asset.id().to_owned(), asset).await;
    }
    catalog
}

/// Build the full application router (same middleware stack as production)
/// over the given catalog.
pub fn build_test_app(catalog: Arc<Catalog>) -> Router {
    build_app_router(build_test_state(catalog))
}

/// Application state over the given catalog, for tests that also need to
/// reach the store or catalog directly.
pub fn build_test_state(catalog: Arc<Catalog>) -> AppState {
    AppState::new(test_config(), catalog)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a request whose body is raw text, for malformed-JSON cases.
pub async fn post_raw(app: &Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a JSON body without a `content-type` header, as curl does with `-d`.
pub async fn send_untyped(app: &Router, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
