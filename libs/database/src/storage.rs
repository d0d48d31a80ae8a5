use core_config::{ConfigError, FromEnv};
use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

use crate::common::{RetryConfig, retry, retry_with_backoff};
use crate::postgres::{self, PostgresConfig};
use crate::sqlite::{self, SqliteConfig};

/// Which engine backs the process.
#[derive(Clone, Debug)]
pub enum StorageConfig {
    Postgres(PostgresConfig),
    Sqlite(SqliteConfig),
}

impl StorageConfig {
    pub fn backend_name(&self) -> &'static str {
        match self {
            StorageConfig::Postgres(_) => "postgres",
            StorageConfig::Sqlite(_) => "sqlite",
        }
    }
}

impl FromEnv for StorageConfig {
    /// PostgreSQL when every `STOQR_API_DB_*` variable is set, SQLite otherwise.
    ///
    /// A missing variable only triggers the fallback; a malformed one is an error.
    fn from_env() -> Result<Self, ConfigError> {
        match PostgresConfig::from_env() {
            Ok(config) => Ok(StorageConfig::Postgres(config)),
            Err(ConfigError::MissingEnvVar(var)) => {
                let config = SqliteConfig::from_env()?;
                warn!(
                    missing = %var,
                    url = %config.url(),
                    "PostgreSQL is not fully configured, falling back to SQLite"
                );
                Ok(StorageConfig::Sqlite(config))
            }
            Err(e) => Err(e),
        }
    }
}

/// Opens a pool for `config`, retrying with backoff (`None` means the default policy).
pub async fn connect_storage(
    config: &StorageConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    info!(backend = config.backend_name(), "Connecting to storage");

    match config {
        StorageConfig::Postgres(pg) => {
            postgres::connect_from_config_with_retry(pg.clone(), retry_config).await
        }
        StorageConfig::Sqlite(lite) => {
            let connect = || sqlite::connect_from_config(lite.clone());
            match retry_config {
                Some(policy) => retry_with_backoff(connect, policy).await,
                None => retry(connect).await,
            }
        }
    }
}

/// Applies every pending migration of `M`.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None).await?;
    info!(app = app_name, "Migrations complete");
    Ok(())
}
