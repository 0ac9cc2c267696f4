//! HTTP-level integration tests for the catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn list_assets_returns_every_kind() {
    let app = common::build_test_app(common::fixture_catalog().await);

    let response = get(&app, "/api/v1/assets").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let mut types: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["type"].as_str().unwrap())
        .collect();
    types.sort();
    assert_eq!(types, ["audience", "chart", "insight"]);
}

#[tokio::test]
async fn get_asset_returns_kind_specific_fields() {
    let app = common::build_test_app(common::fixture_catalog().await);

    let response = get(&app, "/api/v1/assets/chart-2024").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["type"], "chart");
    assert_eq!(json["data"]["name"], "Revenue 2024");
    assert_eq!(json["data"]["chartType"], "bar");
    assert_eq!(json["data"]["dataSource"], "Sales DB");
}

#[tokio::test]
async fn get_unknown_asset_returns_404() {
    let app = common::build_test_app(common::fixture_catalog().await);

    let response = get(&app, "/api/v1/assets/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
