use std::sync::Arc;

use favorites_core::catalog::Catalog;
use favorites_core::favorites::FavoritesStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Shared asset catalog. The store holds its own handle to the same instance.
    pub catalog: Arc<Catalog>,
    /// Per-user favorites.
    pub favorites: Arc<FavoritesStore>,
}

impl AppState {
    /// Build state around an already populated catalog.
    pub fn new(config: ServerConfig, catalog: Arc<Catalog>) -> Self {
        let favorites = Arc::new(FavoritesStore::new(Arc::clone(&catalog)));
        Self {
            config: Arc::new(config),
            catalog,
            favorites,
        }
    }
}
