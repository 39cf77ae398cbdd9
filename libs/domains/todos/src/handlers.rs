use axum::{
    Router,
    extract::State,
    http::HeaderMap,
    routing::get,
};
use axum_helpers::{
    AuditEvent, AuditOutcome, IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    extract_ip_from_headers, extract_user_agent,
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::controller::{Outcome, TodoController};
use crate::models::{CreateTodo, TodoResponse, UpdateTodo};
use crate::repository::TodoRepository;

pub const TAG: &str = "todos";

/// OpenAPI documentation for the Todos API
#[derive(OpenApi)]
#[openapi(
    paths(list_todos, create_todo, show_todo, update_todo, delete_todo),
    components(
        schemas(TodoResponse, CreateTodo, UpdateTodo),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Todo management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the todo router with all HTTP endpoints
pub fn router<R: TodoRepository + 'static>(controller: TodoController<R>) -> Router {
    let shared_controller = Arc::new(controller);

    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route(
            "/{id}",
            get(show_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(shared_controller)
}

/// Record a mutation on the audit log, successful or not.
fn audit<T>(action: &str, id: Option<u64>, outcome: &Outcome<T>, headers: &HeaderMap) {
    let audit_outcome = if outcome.is_success() {
        AuditOutcome::Success
    } else {
        AuditOutcome::Failure
    };

    let mut event = AuditEvent::new(action, id.map(|id| format!("todo:{id}")), audit_outcome)
        .with_ip(extract_ip_from_headers(headers))
        .with_user_agent(extract_user_agent(headers));

    if let Outcome::NotFound(reason) | Outcome::BadRequest(reason) | Outcome::ServerError(reason) =
        outcome
    {
        event = event.with_details(json!({ "reason": reason }));
    }

    event.log();
}

/// List all todos, ordered by ID
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of todos", body = Vec<TodoResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_todos<R: TodoRepository>(
    State(controller): State<Arc<TodoController<R>>>,
) -> Outcome<Vec<TodoResponse>> {
    controller.list().await
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateTodo,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_todo<R: TodoRepository>(
    State(controller): State<Arc<TodoController<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateTodo>,
) -> Outcome<TodoResponse> {
    let outcome = controller.create(input).await;

    let id = match &outcome {
        Outcome::Created(todo) => Some(todo.id),
        _ => None,
    };
    audit("todo.create", id, &outcome, &headers);

    outcome
}

/// Get a todo by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo found", body = TodoResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn show_todo<R: TodoRepository>(
    State(controller): State<Arc<TodoController<R>>>,
    IdPath(id): IdPath,
) -> Outcome<TodoResponse> {
    controller.show(id).await
}

/// Replace a todo's title and description
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "Todo ID")
    ),
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_todo<R: TodoRepository>(
    State(controller): State<Arc<TodoController<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateTodo>,
) -> Outcome<TodoResponse> {
    let outcome = controller.update(id, input).await;
    audit("todo.update", Some(id), &outcome, &headers);
    outcome
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo deleted, empty body"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_todo<R: TodoRepository>(
    State(controller): State<Arc<TodoController<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> Outcome<()> {
    let outcome = controller.delete(id).await;
    audit("todo.delete", Some(id), &outcome, &headers);
    outcome
}
