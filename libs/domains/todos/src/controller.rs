use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::TodoError;
use crate::models::{CreateTodo, TodoResponse, UpdateTodo};
use crate::repository::TodoRepository;

/// Result of a controller action, ready to be encoded by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// 201 with the new resource
    Created(T),
    /// 200 with a payload
    Ok(T),
    /// 200 with an empty body
    NoContent,
    NotFound(String),
    BadRequest(String),
    ServerError(String),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Created(_) | Outcome::Ok(_) | Outcome::NoContent)
    }
}

impl<T> From<TodoError> for Outcome<T> {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => {
                tracing::info!(error = %err, "Todo not found");
                Outcome::NotFound(err.to_string())
            }
            TodoError::Validation(msg) => {
                tracing::info!(error = %msg, "Rejected todo payload");
                Outcome::BadRequest(msg)
            }
            TodoError::Storage(msg) => {
                tracing::error!(error = %msg, "Todo storage failure");
                Outcome::ServerError(msg)
            }
        }
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self {
            Outcome::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Outcome::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Outcome::NoContent => StatusCode::OK.into_response(),
            Outcome::NotFound(msg) => AppError::NotFound(msg).into_response(),
            Outcome::BadRequest(msg) => AppError::BadRequest(msg).into_response(),
            Outcome::ServerError(msg) => AppError::InternalServerError(msg).into_response(),
        }
    }
}

/// Stateless controller: one repository call per action.
pub struct TodoController<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoController<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: CreateTodo) -> Outcome<TodoResponse> {
        if let Err(e) = input.validate() {
            return TodoError::from(e).into();
        }

        match self.repository.create(input).await {
            Ok(todo) => Outcome::Created(todo.into()),
            Err(e) => e.into(),
        }
    }

    #[instrument(skip(self))]
    pub async fn show(&self, id: u64) -> Outcome<TodoResponse> {
        match self.repository.show(id).await {
            Ok(todo) => Outcome::Ok(todo.into()),
            Err(e) => e.into(),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Outcome<Vec<TodoResponse>> {
        match self.repository.list().await {
            Ok(todos) => Outcome::Ok(todos.into_iter().map(TodoResponse::from).collect()),
            Err(e) => e.into(),
        }
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn update(&self, id: u64, input: UpdateTodo) -> Outcome<TodoResponse> {
        if let Err(e) = input.validate() {
            return TodoError::from(e).into();
        }

        match self.repository.update(id, input).await {
            Ok(todo) => Outcome::Ok(todo.into()),
            Err(e) => e.into(),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Outcome<()> {
        match self.repository.delete(id).await {
            Ok(()) => Outcome::NoContent,
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Todo;
    use crate::repository::{InMemoryTodoRepository, MockTodoRepository};
    use mockall::predicate::eq;

    fn milk(description: &str) -> Todo {
        Todo {
            id: 1,
            title: "buy milk".to_string(),
            description: description.to_string(),
        }
    }

    fn create_input(title: &str, description: &str) -> CreateTodo {
        CreateTodo {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_created() {
        let mut repo = MockTodoRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(Todo::new(1, input)));

        let controller = TodoController::new(repo);
        let outcome = controller.create(create_input("buy milk", "2%")).await;

        assert_eq!(outcome, Outcome::Created(milk("2%").into()));
    }

    #[tokio::test]
    async fn test_create_storage_failure_is_server_error() {
        let mut repo = MockTodoRepository::new();
        repo.expect_create()
            .returning(|_| Err(TodoError::Storage("disk full".to_string())));

        let controller = TodoController::new(repo);
        let outcome = controller.create(create_input("buy milk", "")).await;

        assert_eq!(outcome, Outcome::ServerError("disk full".to_string()));
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_create_invalid_payload_skips_repository() {
        let mut repo = MockTodoRepository::new();
        repo.expect_create().never();

        let controller = TodoController::new(repo);
        let outcome = controller.create(create_input("", "")).await;

        assert!(matches!(outcome, Outcome::BadRequest(msg) if msg.contains("title")));
    }

    #[tokio::test]
    async fn test_show_found_and_missing() {
        let mut repo = MockTodoRepository::new();
        repo.expect_show()
            .with(eq(1))
            .returning(|_| Ok(milk("2%")));
        repo.expect_show()
            .with(eq(2))
            .returning(|id| Err(TodoError::NotFound(id)));

        let controller = TodoController::new(repo);

        assert_eq!(controller.show(1).await, Outcome::Ok(milk("2%").into()));
        assert_eq!(
            controller.show(2).await,
            Outcome::NotFound("Todo 2 not found".to_string())
        );
    }

    #[tokio::test]
    async fn test_show_storage_failure_is_server_error() {
        let mut repo = MockTodoRepository::new();
        repo.expect_show()
            .with(eq(1))
            .returning(|_| Err(TodoError::Storage("connection reset".to_string())));

        let controller = TodoController::new(repo);

        assert_eq!(
            controller.show(1).await,
            Outcome::ServerError("connection reset".to_string())
        );
    }

    #[tokio::test]
    async fn test_list_empty_and_failure() {
        let mut repo = MockTodoRepository::new();
        repo.expect_list().times(1).returning(|| Ok(vec![]));

        let controller = TodoController::new(repo);
        assert_eq!(controller.list().await, Outcome::Ok(vec![]));

        let mut repo = MockTodoRepository::new();
        repo.expect_list()
            .returning(|| Err(TodoError::Storage("connection reset".to_string())));

        let controller = TodoController::new(repo);
        assert_eq!(
            controller.list().await,
            Outcome::ServerError("connection reset".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut repo = MockTodoRepository::new();
        repo.expect_update()
            .with(eq(5), mockall::predicate::always())
            .returning(|id, _| Err(TodoError::NotFound(id)));

        let controller = TodoController::new(repo);
        let outcome = controller
            .update(
                5,
                UpdateTodo {
                    title: "buy milk".to_string(),
                    description: "whole".to_string(),
                },
            )
            .await;

        assert_eq!(outcome, Outcome::NotFound("Todo 5 not found".to_string()));
    }

    #[tokio::test]
    async fn test_update_storage_failure_is_server_error() {
        let mut repo = MockTodoRepository::new();
        repo.expect_update()
            .with(eq(1), mockall::predicate::always())
            .returning(|_, _| Err(TodoError::Storage("disk full".to_string())));

        let controller = TodoController::new(repo);
        let outcome = controller
            .update(
                1,
                UpdateTodo {
                    title: "buy milk".to_string(),
                    description: "whole".to_string(),
                },
            )
            .await;

        assert_eq!(outcome, Outcome::ServerError("disk full".to_string()));
    }

    #[tokio::test]
    async fn test_repository_validation_error_is_bad_request() {
        let mut repo = MockTodoRepository::new();
        repo.expect_create()
            .returning(|_| Err(TodoError::Validation("title taken".to_string())));
        repo.expect_show()
            .returning(|_| Err(TodoError::Validation("bad id".to_string())));
        repo.expect_list()
            .returning(|| Err(TodoError::Validation("bad filter".to_string())));
        repo.expect_delete()
            .returning(|_| Err(TodoError::Validation("bad id".to_string())));

        let controller = TodoController::new(repo);

        assert!(matches!(
            controller.create(create_input("buy milk", "")).await,
            Outcome::BadRequest(_)
        ));
        assert!(matches!(controller.show(1).await, Outcome::BadRequest(_)));
        assert!(matches!(controller.list().await, Outcome::BadRequest(_)));
        assert!(matches!(controller.delete(1).await, Outcome::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_update_invalid_payload_is_bad_request() {
        let mut repo = MockTodoRepository::new();
        repo.expect_update().never();

        let controller = TodoController::new(repo);
        let outcome = controller
            .update(
                1,
                UpdateTodo {
                    title: "t".repeat(300),
                    description: String::new(),
                },
            )
            .await;

        assert!(matches!(outcome, Outcome::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_delete_outcomes() {
        let mut repo = MockTodoRepository::new();
        repo.expect_delete().with(eq(1)).returning(|_| Ok(()));
        repo.expect_delete()
            .with(eq(2))
            .returning(|id| Err(TodoError::NotFound(id)));
        repo.expect_delete()
            .with(eq(3))
            .returning(|_| Err(TodoError::Storage("locked".to_string())));

        let controller = TodoController::new(repo);

        assert_eq!(controller.delete(1).await, Outcome::NoContent);
        assert!(matches!(controller.delete(2).await, Outcome::NotFound(_)));
        assert!(matches!(controller.delete(3).await, Outcome::ServerError(_)));
    }

    #[tokio::test]
    async fn test_scenario_against_in_memory_repository() {
        let controller = TodoController::new(InMemoryTodoRepository::new());

        assert_eq!(
            controller.create(create_input("buy milk", "2%")).await,
            Outcome::Created(milk("2%").into())
        );
        assert_eq!(controller.show(1).await, Outcome::Ok(milk("2%").into()));
        assert_eq!(
            controller
                .update(
                    1,
                    UpdateTodo {
                        title: "buy milk".to_string(),
                        description: "whole".to_string(),
                    },
                )
                .await,
            Outcome::Ok(milk("whole").into())
        );
        assert_eq!(controller.delete(1).await, Outcome::NoContent);
        assert!(matches!(controller.show(1).await, Outcome::NotFound(_)));
        assert_eq!(controller.list().await, Outcome::Ok(vec![]));
    }

    #[tokio::test]
    async fn test_outcome_status_codes() {
        assert_eq!(
            Outcome::Created(1).into_response().status(),
            StatusCode::CREATED
        );
        assert_eq!(Outcome::<()>::NoContent.into_response().status(), StatusCode::OK);
        assert_eq!(
            Outcome::<()>::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Outcome::<()>::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Outcome::<()>::ServerError("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
