//! Pieces shared by every engine

pub mod error;
pub mod pool;
pub mod retry;

pub use error::{DatabaseError, DatabaseResult};
pub use pool::PoolConfig;
pub use retry::{RetryConfig, retry, retry_with_backoff};
