pub mod assets;
pub mod favorites;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assets                                   list catalog
/// /assets/{asset_id}                        get one asset
///
/// /users/{user_id}/favorites                list, add
/// /users/{user_id}/favorites/{asset_id}     remove, edit description
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assets", assets::router())
        .nest("/users/{user_id}/favorites", favorites::router())
}
