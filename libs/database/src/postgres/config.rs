use core_config::{ConfigError, FromEnv, env_required};
use sea_orm::ConnectOptions;

use crate::common::PoolConfig;

/// Variables that must all be present for PostgreSQL to be selected.
pub const POSTGRES_ENV_VARS: [&str; 5] = [
    "STOQR_API_DB_HOST",
    "STOQR_API_DB_PORT",
    "STOQR_API_DB_USER",
    "STOQR_API_DB_PASSWORD",
    "STOQR_API_DB_NAME",
];

/// PostgreSQL connection settings
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub url: String,
    pub pool: PoolConfig,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool: PoolConfig::default(),
        }
    }

    /// Builds a URL from discrete settings. TLS is disabled.
    ///
    /// User and password are percent-encoded so any character is allowed.
    pub fn from_parts(host: &str, port: &str, user: &str, password: &str, name: &str) -> Self {
        Self::new(format!(
            "postgres://{}:{}@{}:{}/{}?sslmode=disable",
            urlencoding::encode(user),
            urlencoding::encode(password),
            host,
            port,
            name
        ))
    }

    pub fn with_pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url);
        self.pool.apply(&mut options);
        options
    }
}

impl FromEnv for PostgresConfig {
    /// Reads the five `STOQR_API_DB_*` variables.
    ///
    /// Fails with [`ConfigError::MissingEnvVar`] naming the first absent one.
    fn from_env() -> Result<Self, ConfigError> {
        let [host, port, user, password, name] = POSTGRES_ENV_VARS;
        let host = env_required(host)?;
        let port = env_required(port)?;
        let user = env_required(user)?;
        let password = env_required(password)?;
        let name = env_required(name)?;

        if port.parse::<u16>().is_err() {
            return Err(ConfigError::ParseError {
                key: POSTGRES_ENV_VARS[1].to_string(),
                details: format!("'{port}' is not a valid port"),
            });
        }

        Ok(Self::from_parts(&host, &port, &user, &password, &name).with_pool(PoolConfig::from_env()?))
    }
}
