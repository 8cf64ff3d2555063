//! Bot Test Utils
//!
//! Shared testing utilities for the bot's repository and service tests. This crate offers
//! a builder for test contexts backed by in-memory SQLite databases, factories for every
//! entity and fixtures for Serenity objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Tag;
//!
//! #[tokio::test]
//! async fn test_tag_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Tag)
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
pub mod serenity;
