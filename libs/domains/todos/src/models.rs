use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored todo item. The ID is assigned by the repository and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
}

impl Todo {
    pub fn new(id: u64, input: CreateTodo) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
        }
    }

    /// Replace both mutable fields; the ID is kept.
    pub fn apply_update(&mut self, input: UpdateTodo) {
        self.title = input.title;
        self.description = input.description;
    }
}

/// Payload for creating a todo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTodo {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "buy milk")]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    #[schema(example = "2%")]
    pub description: String,
}

/// Payload for updating a todo; both fields are replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTodo {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "buy milk")]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    #[schema(example = "whole")]
    pub description: String,
}

/// Todo as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    #[schema(example = 1)]
    pub id: u64,
    pub title: String,
    pub description: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
        }
    }
}
