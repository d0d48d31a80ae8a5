//! Storage plumbing for the STOQR services.
//!
//! Two SQL engines are supported through SeaORM: PostgreSQL and SQLite. Which one a
//! process talks to is decided once, by [`StorageConfig`], and everything downstream
//! only sees a [`sea_orm::DatabaseConnection`].
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL connector
//! - `sqlite` (default) - SQLite connector, also used as the local fallback
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::{StorageConfig, connect_storage, run_migrations};
//! use migration::Migrator;
//!
//! let storage = StorageConfig::from_env()?;
//! let db = connect_storage(&storage, None).await?;
//! run_migrations::<Migrator>(&db, "stoqr_api").await?;
//! ```

pub mod common;
pub mod health;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(all(feature = "postgres", feature = "sqlite"))]
mod storage;

pub use common::{DatabaseError, DatabaseResult, PoolConfig, RetryConfig};
pub use health::check_health;

#[cfg(all(feature = "postgres", feature = "sqlite"))]
pub use storage::{StorageConfig, connect_storage, run_migrations};

pub use sea_orm::{DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
