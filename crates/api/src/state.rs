use std::sync::Arc;

use crate::config::ServerConfig;
use crate::submission::SubmissionService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Every handle is constructed explicitly in `main` (or the test harness).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: formflow_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Final-submission workflow.
    pub submissions: SubmissionService,
}

impl AppState {
    /// Wire the state from a pool and configuration.
    pub fn new(pool: formflow_db::DbPool, config: ServerConfig) -> Self {
        Self {
            submissions: SubmissionService::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
