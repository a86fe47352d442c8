//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects

pub mod guild;

pub use guild::create_test_guild;
