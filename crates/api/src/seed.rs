//! Startup population of the catalog from a seed file.

use std::path::Path;

use favorites_core::catalog::{Catalog, SeedData, SeedError};

/// Outcome of seeding the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Assets inserted into the catalog.
    pub loaded: usize,
    /// Assets rejected by validation.
    pub skipped: usize,
}

/// Load `path` into `catalog`, validating every asset first.
///
/// Valid records are applied in a single catalog write. Invalid assets are
/// skipped with a warning rather than failing startup. A missing seed file
/// leaves the catalog empty.
pub async fn seed_catalog(catalog: &Catalog, path: &Path) -> Result<SeedReport, SeedError> {
    let Some(seed) = SeedData::from_file(path).await? else {
        tracing::warn!(path = %path.display(), "Catalog seed file not found, starting empty");
        return Ok(SeedReport::default());
    };

    let (valid, rejected) = seed.partition_valid();
    for (asset, err) in &rejected {
        tracing::warn!(
            asset_id = %asset.id(),
            kind = %asset.kind(),
            error = %err,
            "Skipping invalid seed asset",
        );
    }

    let report = SeedReport {
        loaded: catalog.load_seed(valid).await,
        skipped: rejected.len(),
    };

    tracing::info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        "Catalog seeded",
    );
    Ok(report)
}
