use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Built once in `main` and cloned per request (inner data is behind `Arc`
/// or is already cheap to clone). This replaces the singleton service
/// factory of earlier iterations: one pool per process, passed in
/// explicitly.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: campus_db::DbPool,
    /// Server configuration, including the unenrollment policy.
    pub config: Arc<ServerConfig>,
}
