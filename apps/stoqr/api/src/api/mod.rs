use axum::{Router, routing::get};
use axum_helpers::server::{create_router, health_router};
use tower_http::cors::CorsLayer;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod health;
pub mod items;

/// API routes without the `/api` prefix; `create_router` adds it.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/items", items::router(state))
}

/// `/ready`, backed by a real database check.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// The whole application: API, docs, `/health` and `/ready`.
pub fn app(state: &AppState, cors: CorsLayer) -> Router {
    create_router::<ApiDoc>(routes(state), cors)
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone()))
}
