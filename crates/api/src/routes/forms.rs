//! Route definitions for the form wizard.
//!
//! Mounted at `/forms` by `api_routes()`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

/// Form wizard routes, mounted at `/forms`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/saveDraft", post(forms::save_draft))
        .route("/getDraft", get(forms::get_draft))
        .route("/finalSubmit", post(forms::final_submit))
        .route("/discardDraft", delete(forms::discard_draft))
        .route("/fieldMappings", get(forms::field_mappings))
}
