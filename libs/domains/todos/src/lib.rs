//! Todos Domain
//!
//! CRUD management of todo items behind a storage-agnostic repository.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, audit logging
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Controller  │  ← Validation, maps results to outcomes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage (trait + in-memory / SeaORM)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, payloads, response
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{handlers, InMemoryTodoRepository, TodoController};
//!
//! let repository = InMemoryTodoRepository::new();
//! let controller = TodoController::new(repository);
//!
//! let router = handlers::router(controller);
//! ```

pub mod controller;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod sql;

pub use controller::{Outcome, TodoController};
pub use error::{TodoError, TodoResult};
pub use models::{CreateTodo, Todo, TodoResponse, UpdateTodo};
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use sql::SeaOrmTodoRepository;
