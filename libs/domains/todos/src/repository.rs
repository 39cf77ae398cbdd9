use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTodo, Todo, UpdateTodo};

/// Repository trait for Todo persistence.
///
/// Every call is cancellable by dropping its future; implementations must not
/// leave partial state behind when that happens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persist a new todo under a freshly assigned ID
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo>;

    /// Fetch a todo by ID
    async fn show(&self, id: u64) -> TodoResult<Todo>;

    /// All todos, ordered by ascending ID
    async fn list(&self) -> TodoResult<Vec<Todo>>;

    /// Replace title and description of an existing todo
    async fn update(&self, id: u64, input: UpdateTodo) -> TodoResult<Todo>;

    /// Remove a todo by ID
    async fn delete(&self, id: u64) -> TodoResult<()>;

    /// Readiness probe for the backing store
    async fn health(&self) -> TodoResult<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Store {
    /// Last assigned ID; 0 means none yet
    last_id: u64,
    todos: BTreeMap<u64, Todo>,
}

/// In-memory implementation of TodoRepository.
///
/// Cloning shares the underlying store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo> {
        let mut store = self.store.write().await;

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| TodoError::Storage("todo ID space exhausted".to_string()))?;
        store.last_id = id;

        let todo = Todo::new(id, input);
        store.todos.insert(id, todo.clone());

        tracing::info!(todo_id = id, "Created todo");
        Ok(todo)
    }

    async fn show(&self, id: u64) -> TodoResult<Todo> {
        let store = self.store.read().await;
        store.todos.get(&id).cloned().ok_or(TodoError::NotFound(id))
    }

    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let store = self.store.read().await;
        Ok(store.todos.values().cloned().collect())
    }

    async fn update(&self, id: u64, input: UpdateTodo) -> TodoResult<Todo> {
        let mut store = self.store.write().await;

        let todo = store.todos.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        todo.apply_update(input);
        let updated = todo.clone();

        tracing::info!(todo_id = id, "Updated todo");
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> TodoResult<()> {
        let mut store = self.store.write().await;

        store.todos.remove(&id).ok_or(TodoError::NotFound(id))?;

        tracing::info!(todo_id = id, "Deleted todo");
        Ok(())
    }
}
