use core_config::{ConfigError, FromEnv, env_parse};
use sea_orm::ConnectOptions;
use std::time::Duration;

/// Connection pool tuning shared by the PostgreSQL and SQLite connectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    /// Log every statement through `tracing`
    pub sqlx_logging: bool,
}

impl PoolConfig {
    pub fn with_size(mut self, max_connections: u32, min_connections: u32) -> Self {
        self.max_connections = max_connections;
        self.min_connections = min_connections;
        self
    }

    pub fn apply(&self, options: &mut ConnectOptions) {
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .sqlx_logging(self.sqlx_logging);
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 20,
            min_connections: 1,
            connect_timeout: Duration::from_secs(8),
            acquire_timeout: Duration::from_secs(8),
            sqlx_logging: false,
        }
    }
}

impl FromEnv for PoolConfig {
    /// - `DB_MAX_CONNECTIONS` (default 20)
    /// - `DB_MIN_CONNECTIONS` (default 1)
    /// - `DB_CONNECT_TIMEOUT_SECS` (default 8, also used for acquire)
    /// - `DB_SQLX_LOGGING` (default false)
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let timeout = Duration::from_secs(env_parse(
            "DB_CONNECT_TIMEOUT_SECS",
            defaults.connect_timeout.as_secs(),
        )?);

        Ok(Self {
            max_connections: env_parse("DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: env_parse("DB_MIN_CONNECTIONS", defaults.min_connections)?,
            connect_timeout: timeout,
            acquire_timeout: timeout,
            sqlx_logging: env_parse("DB_SQLX_LOGGING", defaults.sqlx_logging)?,
        })
    }
}
