//! Todos API routes

use axum::Router;
use domain_todos::{TodoController, TodoRepository, handlers};

pub fn router<R: TodoRepository + 'static>(repository: R) -> Router {
    handlers::router(TodoController::new(repository))
}
