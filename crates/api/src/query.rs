//! Shared query parameter types for API handlers.
//!
//! Parameter names follow the client contract (`userId`, `formNumber`).

use serde::Deserialize;
use validator::Validate;

use formflow_core::types::DbId;

/// `?userId=` on endpoints that act on all of a user's data.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserParams {
    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: DbId,
}

/// `?userId=&formNumber=` on draft endpoints. `formNumber` is the optional
/// form/tab discriminator.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DraftParams {
    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: DbId,
    #[validate(range(min = 0, message = "formNumber must not be negative"))]
    pub form_number: Option<i32>,
}
