//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: migrated database, either in-memory SQLite (feature: "sqlite")
//!   or a throwaway PostgreSQL container (feature: "postgres")
//! - `TestDataBuilder`: deterministic test data
//! - `assertions`: assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::sqlite().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let name = builder.name("item", "main");
//!     let connection = db.connection();
//! }
//! ```

mod database;

pub use database::TestDatabase;

/// Builder for test data derived from a seed
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name, so each test gets its own stable data.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let a = TestDataBuilder::from_test_name("test_create_item");
    /// let b = TestDataBuilder::from_test_name("test_create_item");
    /// assert_eq!(a.name("item", "main"), b.name("item", "main"));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `test-{prefix}-{seed}-{suffix}`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A stock level in `0..=max`, stable for this seed
    pub fn stock(&self, max: i32) -> i32 {
        let span = u64::from(max.max(0).unsigned_abs()) + 1;
        (self.seed % span) as i32
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that a stock level stayed within `min..=max`
    pub fn assert_stock_between(actual: i32, min: i32, max: i32, context: &str) {
        assert!(
            (min..=max).contains(&actual),
            "{context}: expected stock in {min}..={max}, got {actual}"
        );
    }

    /// Assert that a Result is Ok and return the value
    pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>, context: &str) -> T {
        match result {
            Ok(value) => value,
            Err(e) => panic!("{context}: expected Ok, got Err({e:?})"),
        }
    }
}
