use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, create_permissive_cors_layer, security_headers};
use axum::{Json, Router, middleware, routing::get};
use core_config::Environment;
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (`/api-docs/openapi.json` and Scalar at `/scalar`)
/// - API routes nested under `/api`
/// - Request timeout from `ServerConfig::request_timeout`; the handler future
///   is dropped when it fires and the client gets `408`
/// - Tracing, security headers, CORS and compression layers
/// - JSON 404 fallback
///
/// Health endpoints are merged by the application with
/// [`health_router`](super::health::health_router).
///
/// # CORS
///
/// `ServerConfig::cors_allowed_origins` restricts cross-origin access. In
/// production the list is required; in development an empty list falls back
/// to a permissive layer.
///
/// # Errors
/// Returns `InvalidInput` when the CORS configuration is missing (production)
/// or contains invalid origins.
pub async fn create_router<T>(
    apis: Router,
    server_config: &ServerConfig,
    environment: &Environment,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = cors_for(server_config, environment)?;
    let openapi = T::openapi();
    let openapi_json = openapi.clone();

    let router = Router::new()
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let doc = openapi_json.clone();
                async move { Json(doc) }
            }),
        )
        .merge(Scalar::with_url("/scalar", openapi))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(TimeoutLayer::new(server_config.request_timeout))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

fn cors_for(server_config: &ServerConfig, environment: &Environment) -> io::Result<CorsLayer> {
    let origins = &server_config.cors_allowed_origins;

    if origins.is_empty() && environment.is_development() {
        warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin in development");
        return Ok(create_permissive_cors_layer());
    }

    let layer = create_cors_layer(origins)?;
    info!("CORS configured with allowed origins: {}", origins.join(","));
    Ok(layer)
}

/// Production server with coordinated shutdown and cleanup.
///
/// On the first SIGINT/SIGTERM the server stops accepting connections and
/// drains in-flight requests. `cleanup` (closing database pools and the like)
/// then runs, bounded by `ServerConfig::shutdown_timeout`.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     database::sql::close(db).await;
/// };
///
/// create_production_app(router, &config, cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let (coordinator, _rx) = ShutdownCoordinator::new();
    let signal_handle = coordinator.clone();
    let signal_task = tokio::spawn(async move { signal_handle.wait_for_signal().await });

    let shutdown_handle = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { shutdown_handle.wait_for_shutdown().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    signal_task.abort();

    let shutdown_timeout = server_config.shutdown_timeout;
    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
