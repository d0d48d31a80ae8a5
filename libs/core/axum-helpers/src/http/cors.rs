use axum::http::{
    HeaderName, HeaderValue, Method,
    header::{ACCEPT, CONTENT_TYPE, ORIGIN},
};
use core_config::ConfigError;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

fn base_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([ORIGIN, X_REQUESTED_WITH, CONTENT_TYPE, ACCEPT])
}

/// Any origin (`Access-Control-Allow-Origin: *`), no credentials.
pub fn create_permissive_cors_layer() -> CorsLayer {
    base_layer().allow_origin(Any)
}

/// Only the listed origins.
pub fn create_cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    base_layer().allow_origin(AllowOrigin::list(origins))
}

/// Reads `CORS_ALLOWED_ORIGIN` (comma-separated).
///
/// Unset or blank yields [`create_permissive_cors_layer`].
pub fn cors_layer_from_env() -> Result<CorsLayer, ConfigError> {
    let raw = std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or_default();

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ConfigError::ParseError {
            key: "CORS_ALLOWED_ORIGIN".to_string(),
            details: e.to_string(),
        })?;

    if origins.is_empty() {
        info!("CORS allows any origin");
        Ok(create_permissive_cors_layer())
    } else {
        info!(origins = %raw, "CORS restricted to configured origins");
        Ok(create_cors_layer(origins))
    }
}
