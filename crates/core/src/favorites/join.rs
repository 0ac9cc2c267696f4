//! Joining stored favorites with their catalog assets.

use crate::assets::Asset;

use super::{Favorite, FavoriteWithAsset};

/// Pair each favorite with its resolved asset, preserving order.
///
/// Favorites whose asset cannot be resolved are dropped from the output.
/// The records themselves are borrowed, never removed, so a dangling
/// favorite resolves again once its asset is back in the catalog.
pub fn resolve<'a, F>(favorites: &[Favorite], mut lookup: F) -> Vec<FavoriteWithAsset>
where
    F: FnMut(&str) -> Option<&'a Asset>,
{
    favorites
        .iter()
        .filter_map(|favorite| {
            lookup(&favorite.asset_id).map(|asset| FavoriteWithAsset {
                asset_id: favorite.asset_id.clone(),
                description: favorite.description.clone(),
                created_at: favorite.created_at,
                asset: asset.clone(),
            })
        })
        .collect()
}
