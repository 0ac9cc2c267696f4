/// Asset identifiers are caller-assigned strings, unique within the catalog.
pub type AssetId = String;

/// User identifiers are opaque strings supplied by the transport layer.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
