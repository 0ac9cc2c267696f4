//! Per-user favorites over the shared catalog.
//!
//! A favorite is a reference (asset id) plus the user's own note and the
//! time it was created. Full asset data is never copied into the store; it
//! is joined from the [`Catalog`] when listing.

pub mod join;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::assets::Asset;
use crate::catalog::Catalog;
use crate::types::{AssetId, Timestamp, UserId};

/// Favorites-domain error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FavoriteError {
    #[error("asset {asset_id} already favorited by user {user_id}")]
    AlreadyFavorited { user_id: UserId, asset_id: AssetId },

    #[error("favorite {asset_id} not found for user {user_id}")]
    NotFound { user_id: UserId, asset_id: AssetId },
}

/// A stored favorite: a user's reference to one catalog asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Referenced asset; may dangle if the asset leaves the catalog.
    pub asset_id: AssetId,
    /// The user's personal note, independent of the asset's description.
    pub description: String,
    /// Set once on creation.
    pub created_at: Timestamp,
}

/// A favorite joined with its resolved asset. Produced only by listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteWithAsset {
    pub asset_id: AssetId,
    pub description: String,
    pub created_at: Timestamp,
    pub asset: Asset,
}

/// In-memory favorites keyed by user, each list in insertion order.
///
/// A single mutex covers the whole map and is held for the full duration of
/// every operation, including the catalog lookups made while listing. The
/// store only ever reads the catalog.
pub struct FavoritesStore {
    catalog: Arc<Catalog>,
    users: Mutex<HashMap<UserId, Vec<Favorite>>>,
}

impl FavoritesStore {
    /// Create an empty store that resolves assets against `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            users: Mutex::new(HashMap::new()),
        }
    }

    /// Append a favorite for `asset_id` to the user's list.
    ///
    /// Fails with [`FavoriteError::AlreadyFavorited`] without changing
    /// anything if the user already has this asset. The catalog is not
    /// consulted: checking that the asset exists is the caller's job.
    pub async fn add(
        &self,
        user_id: &str,
        asset_id: &str,
        description: &str,
    ) -> Result<Favorite, FavoriteError> {
        let mut users = self.users.lock().await;

        if users
            .get(user_id)
            .is_some_and(|favorites| favorites.iter().any(|f| f.asset_id == asset_id))
        {
            return Err(FavoriteError::AlreadyFavorited {
                user_id: user_id.to_owned(),
                asset_id: asset_id.to_owned(),
            });
        }

        let favorite = Favorite {
            asset_id: asset_id.to_owned(),
            description: description.to_owned(),
            created_at: Utc::now(),
        };
        users
            .entry(user_id.to_owned())
            .or_default()
            .push(favorite.clone());

        Ok(favorite)
    }

    /// The user's favorites that resolve in the catalog, in insertion order.
    ///
    /// Unknown users get an empty list.
    pub async fn list(&self, user_id: &str) -> Vec<FavoriteWithAsset> {
        let users = self.users.lock().await;
        let Some(favorites) = users.get(user_id) else {
            return Vec::new();
        };

        let assets = self.catalog.entries().await;
        join::resolve(favorites, |id| assets.get(id))
    }

    /// Remove the user's favorite for `asset_id`, if any.
    ///
    /// Removing something that is not there is a no-op. Remaining favorites
    /// keep their relative order.
    pub async fn remove(&self, user_id: &str, asset_id: &str) {
        let mut users = self.users.lock().await;
        if let Some(favorites) = users.get_mut(user_id) {
            if let Some(index) = favorites.iter().position(|f| f.asset_id == asset_id) {
                favorites.remove(index);
            }
        }
    }

    /// Replace the note on an existing favorite.
    ///
    /// Unlike [`remove`](Self::remove), a missing favorite is reported as
    /// [`FavoriteError::NotFound`]: the edit cannot take effect.
    pub async fn edit_description(
        &self,
        user_id: &str,
        asset_id: &str,
        description: &str,
    ) -> Result<(), FavoriteError> {
        let mut users = self.users.lock().await;
        let favorite = users
            .get_mut(user_id)
            .and_then(|favorites| favorites.iter_mut().find(|f| f.asset_id == asset_id))
            .ok_or_else(|| FavoriteError::NotFound {
                user_id: user_id.to_owned(),
                asset_id: asset_id.to_owned(),
            })?;

        favorite.description = description.to_owned();
        Ok(())
    }
}
