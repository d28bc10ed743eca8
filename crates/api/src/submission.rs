//! Final-submission workflow.
//!
//! Loads every draft for a user, folds them into one master record with
//! the field extractor, then writes the record and removes the consumed
//! drafts. The write and the delete share a transaction, so on any failure
//! the drafts stay in place for a retry.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use formflow_core::error::CoreError;
use formflow_core::extraction::{self, ExtractionReport};
use formflow_core::submission::{self, SubmissionStage};
use formflow_core::types::DbId;
use formflow_db::models::master_record::{CreateMasterRecord, MasterRecord};
use formflow_db::repositories::{DraftRepo, MasterRecordRepo};
use formflow_db::DbPool;

// ---------------------------------------------------------------------------
// Outcome and error types
// ---------------------------------------------------------------------------

/// Successful result of a submission attempt.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The user had no drafts; nothing was written.
    NothingToSubmit,
    /// A master record was written and the consumed drafts deleted.
    Submitted {
        master_record: MasterRecord,
        report: ExtractionReport,
        drafts_deleted: u64,
    },
}

impl SubmissionOutcome {
    /// Plain-text status line returned to the caller.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NothingToSubmit => submission::MSG_NOTHING_TO_SUBMIT,
            Self::Submitted { .. } => submission::MSG_SUBMITTED,
        }
    }
}

/// Failure of a submission attempt. Drafts are never deleted when this is
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// A draft value could not be coerced to its field type.
    #[error(transparent)]
    Transform(#[from] CoreError),

    /// The database failed while executing `stage`.
    #[error("storage failure while {stage}")]
    Storage {
        stage: SubmissionStage,
        #[source]
        source: sqlx::Error,
    },
}

impl SubmissionError {
    /// Stage of the workflow the failure happened in.
    pub fn stage(&self) -> SubmissionStage {
        match self {
            Self::Transform(_) => SubmissionStage::Extracting,
            Self::Storage { stage, .. } => *stage,
        }
    }

    fn storage(stage: SubmissionStage) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Storage { stage, source }
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Transform(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, submission::failure_message(&self)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Runs the final-submission workflow against the draft and master stores.
#[derive(Clone)]
pub struct SubmissionService {
    pool: DbPool,
}

impl SubmissionService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Consolidate all drafts of `user_id` into a new master record.
    ///
    /// Every successful call inserts a fresh row; resubmitting after new
    /// drafts were saved produces a second master record.
    pub async fn submit(&self, user_id: DbId) -> Result<SubmissionOutcome, SubmissionError> {
        let drafts = DraftRepo::list_by_user(&self.pool, user_id)
            .await
            .map_err(SubmissionError::storage(SubmissionStage::LoadingDrafts))
            .inspect_err(|e| log_failure(user_id, e))?;

        if drafts.is_empty() {
            tracing::info!(user_id, "Final submission found no drafts");
            return Ok(SubmissionOutcome::NothingToSubmit);
        }

        let extracted = extraction::extract_merged(drafts.iter().map(|d| &d.form_data))
            .map_err(SubmissionError::Transform)
            .inspect_err(|e| log_failure(user_id, e))?;

        if extracted.report.has_unmapped_keys() {
            tracing::warn!(
                user_id,
                mapping_version = extracted.report.mapping_version,
                unmapped_keys = ?extracted.report.unmapped_keys,
                "Draft keys not covered by the field mapping table"
            );
        }
        if extracted.report.non_object_documents > 0 {
            tracing::warn!(
                user_id,
                count = extracted.report.non_object_documents,
                "Drafts without a JSON object payload were skipped"
            );
        }

        let draft_ids: Vec<DbId> = drafts.iter().map(|d| d.id).collect();
        let input = CreateMasterRecord::from_extraction(user_id, &extracted);

        let (master_record, drafts_deleted) = self
            .commit(user_id, &input, &draft_ids)
            .await
            .map_err(SubmissionError::storage(SubmissionStage::Committing))
            .inspect_err(|e| log_failure(user_id, e))?;

        tracing::info!(
            user_id,
            master_record_id = master_record.id,
            drafts_merged = extracted.report.drafts_merged,
            drafts_deleted,
            "Final submission committed"
        );

        Ok(SubmissionOutcome::Submitted {
            master_record,
            report: extracted.report,
            drafts_deleted,
        })
    }

    /// Insert the master record and delete the drafts it was built from in
    /// one transaction.
    async fn commit(
        &self,
        user_id: DbId,
        input: &CreateMasterRecord,
        draft_ids: &[DbId],
    ) -> Result<(MasterRecord, u64), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let master_record = MasterRecordRepo::create(&mut *tx, input).await?;
        let deleted = DraftRepo::delete_by_ids(&mut *tx, user_id, draft_ids).await?;
        tx.commit().await?;
        Ok((master_record, deleted))
    }
}

fn log_failure(user_id: DbId, err: &SubmissionError) {
    match err {
        SubmissionError::Transform(e) => {
            tracing::warn!(
                user_id,
                stage = err.stage().as_str(),
                error = %e,
                "Final submission rejected"
            );
        }
        SubmissionError::Storage { source, .. } => {
            tracing::error!(
                user_id,
                stage = err.stage().as_str(),
                error = %source,
                "Final submission failed"
            );
        }
    }
}
