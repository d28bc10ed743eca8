//! Handlers for the form wizard draft and submission endpoints.
//!
//! Drafts are append-only JSON snapshots keyed by user (and optionally a
//! form/tab number). Final submission folds them into one master record.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use validator::Validate;

use formflow_core::error::CoreError;
use formflow_core::mapping::{self, FieldMapping};
use formflow_db::models::draft::CreateDraft;
use formflow_db::repositories::DraftRepo;

use crate::error::{AppError, AppResult};
use crate::query::{DraftParams, UserParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// Result of discarding a user's drafts.
#[derive(Debug, Serialize)]
pub struct DiscardResult {
    pub deleted: u64,
}

/// The field mapping table exposed to clients.
#[derive(Debug, Serialize)]
pub struct FieldMappingsResponse {
    pub version: i32,
    pub fields: &'static [FieldMapping],
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a raw request body into a draft document.
///
/// The body must be well-formed JSON and its top level must be an object.
/// JSONB cannot store `\u0000`, so NUL characters in keys or strings are
/// rejected here rather than failing at insert time.
fn parse_draft_body(body: &str) -> AppResult<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {e}")))?;

    if !value.is_object() {
        return Err(AppError::Core(CoreError::Validation(
            "Draft body must be a JSON object".to_string(),
        )));
    }
    if contains_nul(&value) {
        return Err(AppError::Core(CoreError::Validation(
            "Draft body must not contain NUL characters".to_string(),
        )));
    }
    Ok(value)
}

fn contains_nul(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::String(s) => s.contains('\0'),
        serde_json::Value::Array(items) => items.iter().any(contains_nul),
        serde_json::Value::Object(map) => map
            .iter()
            .any(|(key, v)| key.contains('\0') || contains_nul(v)),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// POST /api/forms/saveDraft
// ---------------------------------------------------------------------------

/// Store a new draft for the user. Every call inserts a new row.
pub async fn save_draft(
    State(state): State<AppState>,
    Query(params): Query<DraftParams>,
    body: String,
) -> AppResult<impl IntoResponse> {
    params.validate()?;
    let form_data = parse_draft_body(&body)?;

    let input = CreateDraft {
        user_id: params.user_id,
        form_number: params.form_number,
        form_data,
    };
    let draft = DraftRepo::create(&state.pool, &input).await?;

    tracing::info!(
        draft_id = draft.id,
        user_id = draft.user_id,
        form_number = ?draft.form_number,
        "Draft saved"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: draft })))
}

// ---------------------------------------------------------------------------
// GET /api/forms/getDraft
// ---------------------------------------------------------------------------

/// List the user's drafts in save order, optionally for one form/tab.
pub async fn get_draft(
    State(state): State<AppState>,
    Query(params): Query<DraftParams>,
) -> AppResult<impl IntoResponse> {
    params.validate()?;

    let drafts = match params.form_number {
        Some(form_number) => {
            DraftRepo::list_by_user_and_form(&state.pool, params.user_id, form_number).await?
        }
        None => DraftRepo::list_by_user(&state.pool, params.user_id).await?,
    };

    tracing::debug!(
        user_id = params.user_id,
        count = drafts.len(),
        "Listed drafts"
    );

    Ok(Json(DataResponse { data: drafts }))
}

// ---------------------------------------------------------------------------
// POST /api/forms/finalSubmit
// ---------------------------------------------------------------------------

/// Consolidate the user's drafts into a master record.
///
/// Answers with a plain-text status line. A user without drafts gets a
/// 200 with the "nothing to submit" message; transform failures are 422
/// and storage failures 500.
pub async fn final_submit(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> AppResult<Response> {
    params.validate()?;

    let response = match state.submissions.submit(params.user_id).await {
        Ok(outcome) => (StatusCode::OK, outcome.message()).into_response(),
        Err(err) => err.into_response(),
    };
    Ok(response)
}

// ---------------------------------------------------------------------------
// DELETE /api/forms/discardDraft
// ---------------------------------------------------------------------------

/// Delete every draft of the user without submitting.
pub async fn discard_draft(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> AppResult<impl IntoResponse> {
    params.validate()?;

    let deleted = DraftRepo::delete_by_user(&state.pool, params.user_id).await?;

    tracing::info!(user_id = params.user_id, deleted, "Drafts discarded");

    Ok(Json(DataResponse {
        data: DiscardResult { deleted },
    }))
}

// ---------------------------------------------------------------------------
// GET /api/forms/fieldMappings
// ---------------------------------------------------------------------------

/// Return the JSON key to master field mapping in force.
pub async fn field_mappings() -> Json<DataResponse<FieldMappingsResponse>> {
    Json(DataResponse {
        data: FieldMappingsResponse {
            version: mapping::MAPPING_VERSION,
            fields: mapping::current_mappings(),
        },
    })
}
