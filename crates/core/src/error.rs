use crate::favorites::FavoriteError;

/// Caller-facing error taxonomy.
///
/// Store errors ([`FavoriteError`]) convert into this so the transport layer
/// has a single type to map onto its own outcomes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<FavoriteError> for CoreError {
    fn from(err: FavoriteError) -> Self {
        match err {
            FavoriteError::AlreadyFavorited { .. } => CoreError::Conflict(err.to_string()),
            FavoriteError::NotFound { asset_id, .. } => CoreError::NotFound {
                entity: "Favorite",
                id: asset_id,
            },
        }
    }
}
