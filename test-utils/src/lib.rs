//! Raidtools Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the raid
//! sign-up bot. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, entity factories and serenity object factories.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert raid events, sign-up rows and participation rows with defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_signup_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_raid_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let event = factory::create_raid_event(db, "123").await?;
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
