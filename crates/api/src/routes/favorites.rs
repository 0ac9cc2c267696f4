//! Route definitions for per-user favorites.
//!
//! All routes are mounted under `/users/{user_id}/favorites`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Favorites routes mounted at `/users/{user_id}/favorites`.
///
/// ```text
/// GET    /             -> list_favorites
/// POST   /             -> add_favorite
/// DELETE /{asset_id}   -> remove_favorite
/// PATCH  /{asset_id}   -> edit_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route(
            "/{asset_id}",
            delete(favorites::remove_favorite).patch(favorites::edit_favorite),
        )
}
