use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Todo {0} not found")]
    NotFound(u64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

impl From<DbErr> for TodoError {
    fn from(err: DbErr) -> Self {
        TodoError::Storage(err.to_string())
    }
}

impl From<ValidationErrors> for TodoError {
    fn from(err: ValidationErrors) -> Self {
        TodoError::Validation(err.to_string())
    }
}

/// Convert TodoError to AppError for standardized error responses
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => AppError::NotFound(err.to_string()),
            TodoError::Validation(msg) => AppError::BadRequest(msg),
            TodoError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
