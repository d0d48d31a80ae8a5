//! Readiness check against the live database.

use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

/// 200 when the database answers `SELECT 1`, 503 otherwise.
pub async fn ready_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let backend = state.config.storage.backend_name();

    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::check_health(&state.db)
                .await
                .map_err(|e| format!("{backend} ping failed: {e}"))
        }),
    )];

    run_health_checks(checks).await
}
