//! Extractors that reject with [`AppError`](crate::errors::AppError) instead of axum's defaults.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
