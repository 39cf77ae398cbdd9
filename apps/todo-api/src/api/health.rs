//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use domain_todos::TodoRepository;
use serde_json::Value;
use std::sync::Arc;

/// `/ready` probes the todo storage backend
pub fn router<R: TodoRepository + 'static>(repository: R) -> Router {
    Router::new()
        .route("/ready", get(readiness_check::<R>))
        .with_state(Arc::new(repository))
}

async fn readiness_check<R: TodoRepository>(
    State(repository): State<Arc<R>>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let storage: HealthCheckFuture<'_> =
        Box::pin(async { repository.health().await.map_err(|e| e.to_string()) });

    run_health_checks(vec![("storage", storage)]).await
}
