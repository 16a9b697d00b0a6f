//! Guildhall Test Utils
//!
//! Shared testing utilities for the guildhall backend. Provides a builder for test contexts
//! backed by in-memory SQLite databases, plus factories for the shared validation records and
//! the per-guild collections.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Validation;
//!
//! #[tokio::test]
//! async fn reads_validation_records() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Validation)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
