//! Shared, read-mostly registry of every asset users can favorite.
//!
//! The catalog is populated at startup (from a seed file or explicit
//! inserts) and read concurrently afterwards. It is constructed explicitly
//! and shared behind an `Arc`; there is no process-wide instance.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::assets::{Asset, AssetError, Audience, Chart, Insight};
use crate::types::AssetId;

/// Failure to read or parse a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read catalog seed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse catalog seed {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Contents of a seed file: one list per asset kind.
///
/// Records in each list are untagged; the list they appear in decides their
/// kind. Missing lists are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub charts: Vec<Chart>,
    pub insights: Vec<Insight>,
    pub audiences: Vec<Audience>,
}

impl SeedData {
    /// Read a seed file from disk.
    ///
    /// A missing file is not an error: it yields `Ok(None)` and the caller
    /// starts with an empty catalog.
    pub async fn from_file(path: &Path) -> Result<Option<Self>, SeedError> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SeedError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| SeedError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn len(&self) -> usize {
        self.charts.len() + self.insights.len() + self.audiences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into assets: charts, then insights, then audiences.
    pub fn into_assets(self) -> impl Iterator<Item = Asset> {
        self.charts
            .into_iter()
            .map(Asset::from)
            .chain(self.insights.into_iter().map(Asset::from))
            .chain(self.audiences.into_iter().map(Asset::from))
    }

    /// Split into the records that pass validation and the rejected ones,
    /// each paired with its error. Order within each list is kept.
    pub fn partition_valid(self) -> (SeedData, Vec<(Asset, AssetError)>) {
        let mut valid = SeedData::default();
        let mut rejected = Vec::new();

        for asset in self.into_assets() {
            if let Err(err) = asset.validate() {
                rejected.push((asset, err));
                continue;
            }
            match asset {
                Asset::Chart(chart) => valid.charts.push(chart),
                Asset::Insight(insight) => valid.insights.push(insight),
                Asset::Audience(audience) => valid.audiences.push(audience),
            }
        }

        (valid, rejected)
    }
}

/// Concurrent asset registry keyed by asset id.
///
/// Readers proceed in parallel; a write excludes all readers and writers
/// for its duration. No operation performs I/O.
#[derive(Debug, Default)]
pub struct Catalog {
    assets: RwLock<HashMap<AssetId, Asset>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `asset` under `id`, replacing any previous entry.
    ///
    /// No validation is performed.
    pub async fn insert(&self, id: impl Into<AssetId>, asset: Asset) {
        self.assets.write().await.insert(id.into(), asset);
    }

    /// Insert every seed record under its own id in a single write.
    ///
    /// Later records overwrite earlier ones with the same id. Returns the
    /// number of records applied.
    pub async fn load_seed(&self, seed: SeedData) -> usize {
        let mut assets = self.assets.write().await;
        let mut applied = 0;
        for asset in seed.into_assets() {
            assets.insert(asset.id().to_owned(), asset);
            applied += 1;
        }
        applied
    }

    /// Point lookup; `None` if no asset has this id.
    pub async fn get(&self, id: &str) -> Option<Asset> {
        self.assets.read().await.get(id).cloned()
    }

    /// Existence check without cloning the asset.
    pub async fn contains(&self, id: &str) -> bool {
        self.assets.read().await.contains_key(id)
    }

    /// Snapshot of every asset. Order is unspecified.
    pub async fn list(&self) -> Vec<Asset> {
        self.assets.read().await.values().cloned().collect()
    }

    /// Number of assets in the catalog.
    pub async fn count(&self) -> usize {
        self.assets.read().await.len()
    }

    /// Hold a read guard over the whole map, for batched lookups.
    pub(crate) async fn entries(&self) -> RwLockReadGuard<'_, HashMap<AssetId, Asset>> {
        self.assets.read().await
    }
}
