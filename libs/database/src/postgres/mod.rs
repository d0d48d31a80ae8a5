//! PostgreSQL connector

mod config;
mod connector;

pub use config::{POSTGRES_ENV_VARS, PostgresConfig};
pub use connector::{connect_from_config, connect_from_config_with_retry};
pub use crate::health::check_health;
