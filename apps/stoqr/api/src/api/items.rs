use axum::Router;
use domain_items::{ItemService, SqlItemRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = SqlItemRepository::new(state.db.clone());
    let service = ItemService::new(repository);
    handlers::router(service)
}
