//! Master record entity model and DTOs.

use formflow_core::extraction::{ExtractedFields, Extraction};
use formflow_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `master_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MasterRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub qualification: Option<String>,
    pub experience: Option<i32>,
    pub skills: Option<String>,
    pub project_details: Option<String>,
    pub mapping_version: i32,
    pub drafts_merged: i32,
    pub submitted_at: Timestamp,
}

/// DTO for inserting a master record.
#[derive(Debug, Clone)]
pub struct CreateMasterRecord {
    pub user_id: DbId,
    pub fields: ExtractedFields,
    pub mapping_version: i32,
    pub drafts_merged: i32,
}

impl CreateMasterRecord {
    /// Build the insert DTO from an extraction result.
    pub fn from_extraction(user_id: DbId, extraction: &Extraction) -> Self {
        Self {
            user_id,
            fields: extraction.fields.clone(),
            mapping_version: extraction.report.mapping_version,
            drafts_merged: i32::try_from(extraction.report.drafts_merged).unwrap_or(i32::MAX),
        }
    }
}
