use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    formflow_db::health_check(&pool).await.unwrap();

    for table in ["form_drafts", "master_records"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Draft payloads are stored in a native JSONB column.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_form_data_is_jsonb(pool: PgPool) {
    let row: (String,) = sqlx::query_as(
        "SELECT data_type FROM information_schema.columns \
         WHERE table_name = 'form_drafts' AND column_name = 'form_data'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(row.0, "jsonb");
}
