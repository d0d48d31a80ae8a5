use core_config::ConfigError;

/// Errors raised while configuring, connecting to or probing a database
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Sea(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Connection could not be established, retries included
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
