pub mod forms;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /forms/saveDraft        POST    store a draft (?userId, formNumber)
/// /forms/getDraft         GET     list drafts (?userId, formNumber)
/// /forms/finalSubmit      POST    consolidate drafts (?userId)
/// /forms/discardDraft     DELETE  drop all drafts (?userId)
/// /forms/fieldMappings    GET     JSON key to field mapping table
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/forms", forms::router())
}
