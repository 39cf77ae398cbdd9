use sea_orm::entity::prelude::*;

use crate::error::TodoError;
use crate::models::Todo;

/// Sea-ORM Entity for the todos table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Todo {
    type Error = TodoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = u64::try_from(model.id)
            .map_err(|_| TodoError::Storage(format!("invalid stored todo id {}", model.id)))?;

        Ok(Self {
            id,
            title: model.title,
            description: model.description,
        })
    }
}
