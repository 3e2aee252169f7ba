//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned per request through Axum's
//! state extraction. `DatabaseConnection` is a pool, so clones share it.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
