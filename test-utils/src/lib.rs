//! Shardbot Test Utils
//!
//! Provides shared testing utilities for the shardbot workspace. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases, plus factories for seeding
//! badge records.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Badge;
//!
//! #[tokio::test]
//! async fn test_badge_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Badge)
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
