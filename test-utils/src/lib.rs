//! Callboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit
//! tests for the call delivery worker. This crate offers a builder pattern
//! for creating test contexts with in-memory SQLite databases and
//! customizable table schemas, plus factories for seeding domain entities.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Helpers that insert entities with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_order_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new()
//!         .with_order_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (buyer, order) = factory::helpers::create_order_with_buyer(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
