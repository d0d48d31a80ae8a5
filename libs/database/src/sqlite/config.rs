use core_config::{ConfigError, FromEnv, env_or_default};
use sea_orm::ConnectOptions;
use std::path::PathBuf;

use crate::common::PoolConfig;

pub const DEFAULT_SQLITE_PATH: &str = "stoqr.db";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqliteLocation {
    /// Database file, created on first connect
    File(PathBuf),
    /// Private in-memory database that lives as long as the pool
    Memory,
}

/// SQLite connection settings
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    pub location: SqliteLocation,
    pub pool: PoolConfig,
}

impl SqliteConfig {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: SqliteLocation::File(path.into()),
            pool: PoolConfig::default(),
        }
    }

    /// An in-memory database pinned to a single connection.
    ///
    /// Every SQLite connection to `:memory:` opens its own empty database, so the pool
    /// must never grow past one.
    pub fn in_memory() -> Self {
        Self {
            location: SqliteLocation::Memory,
            pool: PoolConfig::default().with_size(1, 1),
        }
    }

    pub fn with_pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    pub fn url(&self) -> String {
        match &self.location {
            SqliteLocation::File(path) => format!("sqlite://{}?mode=rwc", path.display()),
            SqliteLocation::Memory => "sqlite::memory:".to_string(),
        }
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url());
        self.pool.apply(&mut options);
        if self.location == SqliteLocation::Memory {
            options.max_connections(1).min_connections(1);
        }
        options
    }
}

impl FromEnv for SqliteConfig {
    /// `STOQR_API_SQLITE_PATH` (default `stoqr.db`) plus the shared `DB_*` pool settings
    fn from_env() -> Result<Self, ConfigError> {
        let path = env_or_default("STOQR_API_SQLITE_PATH", DEFAULT_SQLITE_PATH);
        let config = if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::file(path).with_pool(PoolConfig::from_env()?)
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_url_creates_missing_database() {
        let config = SqliteConfig::file("data/stoqr.db");
        assert_eq!(config.url(), "sqlite://data/stoqr.db?mode=rwc");
    }

    #[test]
    fn test_in_memory_is_single_connection() {
        let config = SqliteConfig::in_memory();
        assert_eq!(config.url(), "sqlite::memory:");
        assert_eq!(config.pool.max_connections, 1);
    }

    #[test]
    fn test_from_env_default_path() {
        temp_env::with_var_unset("STOQR_API_SQLITE_PATH", || {
            let config = SqliteConfig::from_env().unwrap();
            assert_eq!(
                config.location,
                SqliteLocation::File(PathBuf::from(DEFAULT_SQLITE_PATH))
            );
        });
    }

    #[test]
    fn test_from_env_memory() {
        temp_env::with_var("STOQR_API_SQLITE_PATH", Some(":memory:"), || {
            let config = SqliteConfig::from_env().unwrap();
            assert_eq!(config.location, SqliteLocation::Memory);
        });
    }
}
