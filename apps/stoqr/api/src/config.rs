use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::StorageConfig;

pub use core_config::Environment;

/// Process configuration, read once at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 by default
        let storage = StorageConfig::from_env()?; // PostgreSQL, or the SQLite fallback

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            storage,
        })
    }
}
