use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

use super::SqliteConfig;

pub async fn connect_from_config(config: SqliteConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config.url();
    let db = Database::connect(config.into_connect_options()).await?;
    info!(%url, "Connected to SQLite");
    Ok(db)
}
