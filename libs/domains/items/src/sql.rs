use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::LikeExpr,
};

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{Item, ItemFilter, ItemInput},
    repository::ItemRepository,
};

/// SeaORM-backed repository; works against PostgreSQL and SQLite alike.
///
/// The name filter is a SQL `LIKE '%pattern%'` with `%`, `_` and the escape
/// character escaped, so the pattern matches literally. Case sensitivity follows
/// the engine.
#[derive(Clone)]
pub struct SqlItemRepository {
    db: DatabaseConnection,
}

impl SqlItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find(&self, id: i32) -> ItemResult<entity::Model> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ItemError::NotFound(id))
    }
}

const LIKE_ESCAPE: char = '\\';

/// `%pattern%` with the pattern's own LIKE metacharacters escaped
fn substring_like(pattern: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(pattern.len() + 2);
    escaped.push('%');
    for c in pattern.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped.push('%');
    LikeExpr::new(escaped).escape(LIKE_ESCAPE)
}

#[async_trait]
impl ItemRepository for SqlItemRepository {
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        let model = entity::ActiveModel::from(input).insert(&self.db).await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Item> {
        self.find(id).await.map(Item::from)
    }

    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let mut query = entity::Entity::find();

        if let Some(pattern) = filter.pattern() {
            query = query.filter(entity::Column::Name.like(substring_like(pattern)));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<Item> {
        self.find(id).await?;

        let model = entity::ActiveModel::replacing(id, input)
            .update(&self.db)
            .await?;

        tracing::info!(item_id = id, "Updated item");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ItemResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        tracing::info!(item_id = id, rows = result.rows_affected, "Deleted item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn widget() -> entity::Model {
        entity::Model {
            id: 3,
            name: "widget".to_string(),
            desired: 10,
            actual: 4,
        }
    }

    #[tokio::test]
    async fn test_get_by_id_maps_missing_row_to_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = SqlItemRepository::new(db);

        assert!(matches!(repo.get_by_id(3).await, Err(ItemError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_query_errors_become_storage_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = SqlItemRepository::new(db);

        let result = repo.list(ItemFilter::default()).await;
        assert!(matches!(result, Err(ItemError::Storage(msg)) if msg.contains("connection reset")));
    }

    #[tokio::test]
    async fn test_list_filter_uses_like_and_id_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![widget()]])
            .into_connection();
        let repo = SqlItemRepository::new(db.clone());

        let items = repo.list(ItemFilter::name_contains("idg")).await.unwrap();
        assert_eq!(items, vec![Item::from(widget())]);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("LIKE"), "{log}");
        assert!(log.contains("%idg%"), "{log}");
        assert!(log.contains("ORDER BY"), "{log}");
        assert!(log.contains("ESCAPE"), "{log}");
    }

    #[tokio::test]
    async fn test_update_unknown_id_does_not_write() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = SqlItemRepository::new(db.clone());

        let input = ItemInput {
            name: "ghost".into(),
            desired: 1,
            actual: 1,
        };
        assert!(matches!(repo.update(8, input).await, Err(ItemError::NotFound(8))));

        let log = format!("{:?}", db.into_transaction_log());
        assert!(!log.contains("UPDATE"), "{log}");
    }
}
