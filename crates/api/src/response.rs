//! Shared response envelope for API handlers.
//!
//! Successful payloads are wrapped as `{ "data": ... }`. Use [`DataResponse`]
//! rather than ad-hoc `serde_json::json!({ "data": ... })`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: favorites }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
