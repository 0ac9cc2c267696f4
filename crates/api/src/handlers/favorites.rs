//! Handlers for a user's favorites.
//!
//! The catalog existence check for new favorites happens here; the store
//! itself accepts any asset id.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use favorites_core::error::CoreError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /users/{user_id}/favorites`.
///
/// Missing or `null` fields read as empty strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavorite {
    #[serde(default, alias = "assetID")]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PATCH /users/{user_id}/favorites/{asset_id}`.
///
/// A missing or `null` description clears the note.
#[derive(Debug, Deserialize)]
pub struct EditFavorite {
    #[serde(default)]
    pub description: Option<String>,
}

/// Decode a JSON request body regardless of its `Content-Type`.
///
/// Only bodies that are not valid JSON for `T` are rejected.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body)
        .map_err(|err| AppError::BadRequest(format!("invalid request: {err}")))
}

/// GET /api/v1/users/{user_id}/favorites
///
/// The user's favorites joined with their catalog assets, in the order they
/// were added. Always a list, empty for unknown users.
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let favorites = state.favorites.list(&user_id).await;

    Ok(Json(DataResponse { data: favorites }))
}

/// POST /api/v1/users/{user_id}/favorites
///
/// 404 if the asset is not in the catalog, 409 if already favorited.
pub async fn add_favorite(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let input: AddFavorite = parse_body(&body)?;
    let asset_id = input.asset_id.unwrap_or_default();
    let description = input.description.unwrap_or_default();

    if asset_id.is_empty() {
        return Err(AppError::BadRequest("assetId is required".into()));
    }

    if !state.catalog.contains(&asset_id).await {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id: asset_id,
        }));
    }

    let favorite = state
        .favorites
        .add(&user_id, &asset_id, &description)
        .await?;

    tracing::info!(
        user_id = %user_id,
        asset_id = %favorite.asset_id,
        "Favorite added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: favorite })))
}

/// DELETE /api/v1/users/{user_id}/favorites/{asset_id}
///
/// Always 204, whether or not the favorite existed.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((user_id, asset_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    state.favorites.remove(&user_id, &asset_id).await;

    tracing::info!(user_id = %user_id, asset_id = %asset_id, "Favorite removed");

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/users/{user_id}/favorites/{asset_id}
///
/// Replace the user's note on a favorite. 404 if the favorite does not exist.
pub async fn edit_favorite(
    State(state): State<AppState>,
    Path((user_id, asset_id)): Path<(String, String)>,
    body: Bytes,
) -> AppResult<StatusCode> {
    let input: EditFavorite = parse_body(&body)?;
    let description = input.description.unwrap_or_default();

    state
        .favorites
        .edit_description(&user_id, &asset_id, &description)
        .await?;

    tracing::info!(user_id = %user_id, asset_id = %asset_id, "Favorite description updated");

    Ok(StatusCode::NO_CONTENT)
}
