//! Handlers for browsing the shared asset catalog.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use favorites_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/assets
///
/// Every asset in the catalog, in no particular order.
pub async fn list_assets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = state.catalog.list().await;

    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/{asset_id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let asset = state
        .catalog
        .get(&asset_id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id: asset_id,
        }))?;

    Ok(Json(DataResponse { data: asset }))
}
