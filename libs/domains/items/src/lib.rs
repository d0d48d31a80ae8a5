//! Items Domain
//!
//! Inventory items: a name, a desired stock level and the actual stock level.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, withdraw transition
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + SQL (PostgreSQL/SQLite) and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, ItemInput, ItemFilter, SeaORM entity
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, ItemService, SqlItemRepository};
//!
//! # async fn example() -> Result<(), sea_orm::DbErr> {
//! let db = sea_orm::Database::connect("sqlite::memory:").await?;
//! let service = ItemService::new(SqlItemRepository::new(db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sql;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{Item, ItemFilter, ItemInput};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
pub use sql::SqlItemRepository;
