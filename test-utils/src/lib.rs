//! PointerBot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the bot.
//! This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas, factories for persisted rows, and JSON
//! fixtures mirroring what Discord and Pointercrate return.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert rows with sensible defaults
//! - **fixture**: Pointercrate API payloads as `serde_json::Value`
//! - **serenity**: Serenity model objects deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildSettings;
//!
//! #[tokio::test]
//! async fn test_settings() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildSettings)
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
pub mod fixture;
pub mod serenity;
