//! Draft entity model and DTOs.

use formflow_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `form_drafts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DraftRecord {
    pub id: DbId,
    pub user_id: DbId,
    /// Optional form/tab discriminator supplied by the client.
    pub form_number: Option<i32>,
    pub form_data: serde_json::Value,
    pub saved_at: Timestamp,
}

/// DTO for inserting a new draft.
#[derive(Debug, Clone)]
pub struct CreateDraft {
    pub user_id: DbId,
    pub form_number: Option<i32>,
    pub form_data: serde_json::Value,
}
