use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    let code = ErrorCode::NotFound;
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(code, code.default_message())),
    )
        .into_response()
}
