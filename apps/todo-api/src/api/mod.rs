//! API routes module

pub mod health;
pub mod todos;

use axum::Router;
use domain_todos::TodoRepository;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes<R: TodoRepository + 'static>(repository: R) -> Router {
    Router::new().nest("/todos", todos::router(repository))
}
