use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Wraps `apis` with the cross-cutting layers every service gets.
///
/// - `apis` nested under `/api`
/// - Swagger UI, ReDoc, RapiDoc and Scalar, served from `T::openapi()`
/// - JSON 404 fallback
/// - request tracing, security headers, `cors`, response compression
///
/// Domain routers are expected to carry their own state already.
pub fn create_router<T>(apis: Router, cors: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
}

/// Binds `server_config.address()` and serves until SIGINT/SIGTERM.
///
/// `cleanup` runs once shutdown starts and is abandoned after
/// `server_config.shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    let coordinator = ShutdownCoordinator::new();

    let signals = coordinator.clone();
    tokio::spawn(async move { signals.wait_for_signal().await });

    serve(
        listener,
        router,
        coordinator,
        server_config.shutdown_timeout,
        cleanup,
    )
    .await
}

/// Serves `router` on `listener` until `coordinator` requests shutdown.
///
/// In-flight requests are drained, then `cleanup` runs with `shutdown_timeout` as its budget.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server listening on {}", listener.local_addr()?);

    let cleanup_watch = coordinator.clone();
    let cleanup_handle = tokio::spawn(async move {
        cleanup_watch.shutdown_requested().await;
        info!(timeout = ?shutdown_timeout, "Running cleanup");
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed"),
            Err(_) => warn!(timeout = ?shutdown_timeout, "Cleanup timed out, forcing shutdown"),
        }
    });

    let graceful = coordinator.clone();
    let result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { graceful.shutdown_requested().await })
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Server error"));

    // A serve error still has to release the cleanup task
    coordinator.shutdown();
    if let Err(e) = cleanup_handle.await {
        tracing::error!(error = %e, "Cleanup task panicked");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct EmptyDoc;

    fn app() -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        create_router::<EmptyDoc>(apis, crate::http::create_permissive_cors_layer())
    }

    async fn get_status(router: Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_routes_nested_under_api() {
        assert_eq!(get_status(app(), "/api/ping").await, StatusCode::OK);
        assert_eq!(get_status(app(), "/ping").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        assert_eq!(
            get_status(app(), "/api-docs/openapi.json").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_serve_runs_cleanup_on_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let coordinator = ShutdownCoordinator::new();
        let cleaned = Arc::new(AtomicBool::new(false));
        let flag = cleaned.clone();

        let server = tokio::spawn(serve(
            listener,
            app(),
            coordinator.clone(),
            Duration::from_secs(1),
            async move { flag.store(true, Ordering::SeqCst) },
        ));

        coordinator.shutdown();
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server should stop")
            .unwrap();

        assert!(result.is_ok());
        assert!(cleaned.load(Ordering::SeqCst));
    }
}
