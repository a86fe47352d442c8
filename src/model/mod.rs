//! Domain models and parameter types.
//!
//! Persisted models are converted from entity models at the repository boundary.
//! Remote models mirror the Pointercrate and level metadata payloads and are
//! deserialized directly by the API clients.

pub mod command_usage;
pub mod guild_settings;
pub mod level;
pub mod pointercrate;
pub mod profile;
