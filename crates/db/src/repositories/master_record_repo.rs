//! Repository for the `master_records` table.

use formflow_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::master_record::{CreateMasterRecord, MasterRecord};

/// Column list for `master_records` queries.
const COLUMNS: &str = "id, user_id, name, email, phone, address, qualification, \
     experience, skills, project_details, mapping_version, drafts_merged, submitted_at";

/// Master store: one consolidated row per successful final submission.
pub struct MasterRecordRepo;

impl MasterRecordRepo {
    /// Insert a master record. There is no upsert: submitting twice for the
    /// same user yields two rows.
    pub async fn create<'e, E>(
        executor: E,
        input: &CreateMasterRecord,
    ) -> Result<MasterRecord, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO master_records \
                (user_id, name, email, phone, address, qualification, \
                 experience, skills, project_details, mapping_version, drafts_merged) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        let f = &input.fields;
        sqlx::query_as::<_, MasterRecord>(&query)
            .bind(input.user_id)
            .bind(&f.name)
            .bind(&f.email)
            .bind(&f.phone)
            .bind(&f.address)
            .bind(&f.qualification)
            .bind(f.experience)
            .bind(&f.skills)
            .bind(&f.project_details)
            .bind(input.mapping_version)
            .bind(input.drafts_merged)
            .fetch_one(executor)
            .await
    }

    /// List a user's master records, oldest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<MasterRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM master_records WHERE user_id = $1 ORDER BY submitted_at, id"
        );
        sqlx::query_as::<_, MasterRecord>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Count master records for a user.
    pub async fn count_by_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM master_records WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
