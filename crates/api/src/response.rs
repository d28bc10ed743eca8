//! Shared response envelope types for API handlers.
//!
//! JSON responses use a `{ "data": ... }` envelope. The final-submit
//! endpoint is the exception: it answers with a plain-text status line.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: drafts }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
