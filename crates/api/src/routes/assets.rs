//! Route definitions for the asset catalog.
//!
//! All routes are mounted under `/assets`.

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Catalog routes mounted at `/assets`.
///
/// ```text
/// GET    /             -> list_assets
/// GET    /{asset_id}   -> get_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets))
        .route("/{asset_id}", get(assets::get_asset))
}
