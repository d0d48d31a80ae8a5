use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

/// JSON body decoded from the raw bytes, then validated.
///
/// A `null` body decodes like `{}`, so types with field defaults accept it.
/// The `Content-Type` header is not inspected. Every failure (unreadable body,
/// malformed JSON, wrong shape, failed validation) is a 400.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Restock {
///     #[validate(range(min = 0))]
///     actual: i32,
/// }
///
/// async fn restock(ValidatedJson(body): ValidatedJson<Restock>) -> String {
///     body.actual.to_string()
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let value = match serde_json::from_slice(&bytes)? {
            Value::Null => Value::Object(Map::new()),
            value => value,
        };
        let data: T = serde_json::from_value(value)?;
        data.validate()?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Restock {
        #[serde(default)]
        name: String,
        #[serde(default)]
        #[validate(range(min = 0))]
        actual: i32,
    }

    async fn restock(ValidatedJson(body): ValidatedJson<Restock>) -> String {
        format!("{}:{}", body.name, body.actual)
    }

    async fn status_for(body: &'static str, content_type: Option<&str>) -> StatusCode {
        let app = Router::new().route("/", post(restock));
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body)).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_accepts_body_without_content_type() {
        assert_eq!(status_for(r#"{"actual":3}"#, None).await, StatusCode::OK);
        assert_eq!(
            status_for(r#"{"actual":3}"#, Some("text/plain")).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_null_body_decodes_as_empty_object() {
        let app = Router::new().route("/", post(restock));
        let response = app
            .oneshot(Request::builder().method("POST").uri("/").body(Body::from("null")).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        assert_eq!(&body[..], b":0");
    }

    #[tokio::test]
    async fn test_every_failure_is_bad_request() {
        let json = Some("application/json");
        assert_eq!(status_for("", json).await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for("{", json).await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for(r#"{"actual":"x"}"#, json).await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for(r#"{"actual":-1}"#, json).await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for("[1]", json).await, StatusCode::BAD_REQUEST);
    }
}
