//! Shared application state.

use database::DatabaseConnection;

/// Handed to every router that needs storage; cloning shares the pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
