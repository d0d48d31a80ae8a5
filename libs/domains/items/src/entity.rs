use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Item, ItemInput};

/// SeaORM entity for the `items` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub desired: i32,
    pub actual: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            desired: model.desired,
            actual: model.actual,
        }
    }
}

// New row; the id comes from the database
impl From<ItemInput> for ActiveModel {
    fn from(input: ItemInput) -> Self {
        Self {
            id: NotSet,
            name: Set(input.name),
            desired: Set(input.desired),
            actual: Set(input.actual),
        }
    }
}

impl ActiveModel {
    /// Full overwrite of an existing row
    pub fn replacing(id: i32, input: ItemInput) -> Self {
        Self {
            id: sea_orm::ActiveValue::Unchanged(id),
            ..Self::from(input)
        }
    }
}
