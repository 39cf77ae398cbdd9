use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{TodoError, TodoResult},
    models::{CreateTodo, Todo, UpdateTodo},
    repository::TodoRepository,
};

/// Durable TodoRepository on SeaORM (PostgreSQL in production, SQLite locally).
///
/// IDs come from the table's auto-increment key, so a deleted ID is never
/// handed out again.
#[derive(Debug, Clone)]
pub struct SeaOrmTodoRepository {
    db: DatabaseConnection,
}

impl SeaOrmTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Primary key for `id`. IDs beyond the column range cannot exist.
fn key(id: u64) -> TodoResult<i32> {
    i32::try_from(id).map_err(|_| TodoError::NotFound(id))
}

#[async_trait]
impl TodoRepository for SeaOrmTodoRepository {
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo> {
        let model = entity::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
        }
        .insert(&self.db)
        .await?;

        tracing::info!(todo_id = model.id, "Created todo");
        model.try_into()
    }

    async fn show(&self, id: u64) -> TodoResult<Todo> {
        entity::Entity::find_by_id(key(id)?)
            .one(&self.db)
            .await?
            .ok_or(TodoError::NotFound(id))?
            .try_into()
    }

    async fn list(&self) -> TodoResult<Vec<Todo>> {
        entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Todo::try_from)
            .collect()
    }

    async fn update(&self, id: u64, input: UpdateTodo) -> TodoResult<Todo> {
        let result = entity::ActiveModel {
            id: Set(key(id)?),
            title: Set(input.title),
            description: Set(input.description),
        }
        .update(&self.db)
        .await;

        match result {
            Ok(model) => {
                tracing::info!(todo_id = id, "Updated todo");
                model.try_into()
            }
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => Err(TodoError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: u64) -> TodoResult<()> {
        let result = entity::Entity::delete_by_id(key(id)?)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(todo_id = id, "Deleted todo");
        Ok(())
    }

    async fn health(&self) -> TodoResult<()> {
        database::sql::check_health(&self.db)
            .await
            .map_err(|e| TodoError::Storage(e.to_string()))
    }
}
