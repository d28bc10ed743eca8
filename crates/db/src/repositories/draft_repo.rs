//! Repository for the `form_drafts` table.

use formflow_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::draft::{CreateDraft, DraftRecord};

/// Column list for `form_drafts` queries.
const COLUMNS: &str = "id, user_id, form_number, form_data, saved_at";

/// Fetch order for a user's drafts. Later-saved drafts come last so they
/// win when the extractor folds overlapping keys.
const FETCH_ORDER: &str = "ORDER BY saved_at ASC, id ASC";

/// Draft store: append-only snapshots of partially filled forms.
pub struct DraftRepo;

impl DraftRepo {
    /// Insert a new draft. Never updates an existing row.
    pub async fn create<'e, E>(executor: E, input: &CreateDraft) -> Result<DraftRecord, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO form_drafts (user_id, form_number, form_data) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DraftRecord>(&query)
            .bind(input.user_id)
            .bind(input.form_number)
            .bind(&input.form_data)
            .fetch_one(executor)
            .await
    }

    /// List all drafts for a user in fetch order.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<DraftRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_drafts WHERE user_id = $1 {FETCH_ORDER}");
        sqlx::query_as::<_, DraftRecord>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's drafts for one form/tab in fetch order.
    pub async fn list_by_user_and_form(
        pool: &PgPool,
        user_id: DbId,
        form_number: i32,
    ) -> Result<Vec<DraftRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM form_drafts \
             WHERE user_id = $1 AND form_number = $2 {FETCH_ORDER}"
        );
        sqlx::query_as::<_, DraftRecord>(&query)
            .bind(user_id)
            .bind(form_number)
            .fetch_all(pool)
            .await
    }

    /// Count drafts for a user.
    pub async fn count_by_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM form_drafts WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Delete every draft for a user. Returns the number of rows removed;
    /// zero when the user had none.
    pub async fn delete_by_user<'e, E>(executor: E, user_id: DbId) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM form_drafts WHERE user_id = $1")
            .bind(user_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete the given drafts of a user. Drafts saved after `ids` was read
    /// are left untouched.
    pub async fn delete_by_ids<'e, E>(
        executor: E,
        user_id: DbId,
        ids: &[DbId],
    ) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM form_drafts WHERE user_id = $1 AND id = ANY($2)")
            .bind(user_id)
            .bind(ids)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
