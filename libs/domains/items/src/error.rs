use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    /// Malformed request: bad JSON, failed validation or a non-integer id
    #[error("Invalid request: {0}")]
    Decode(String),

    #[error("Item {0} not found")]
    NotFound(i32),

    /// Any other repository failure
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    /// Reports a missing item as a storage failure.
    ///
    /// Read-one and update answer 500 rather than 404 for an unknown id.
    pub fn not_found_as_storage(self) -> Self {
        match self {
            ItemError::NotFound(id) => ItemError::Storage(format!("item {id} not found")),
            other => other,
        }
    }
}

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Decode(msg) => AppError::BadRequest(msg),
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {id} not found")),
            ItemError::Storage(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<sea_orm::DbErr> for ItemError {
    fn from(err: sea_orm::DbErr) -> Self {
        ItemError::Storage(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ItemError {
    fn from(err: validator::ValidationErrors) -> Self {
        ItemError::Decode(err.to_string())
    }
}
