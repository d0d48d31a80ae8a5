//! SQLite connector, used for local runs and as the fallback when PostgreSQL is not configured

mod config;
mod connector;

pub use config::SqliteConfig;
pub use connector::connect_from_config;
pub use crate::health::check_health;
