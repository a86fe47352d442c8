//! Factory methods for creating test data.
//!
//! Each persisted entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let settings = factory::create_guild_settings(&db).await?;
//!
//! let spanish = factory::guild_settings::GuildSettingsFactory::new(&db)
//!     .lang("spanish")
//!     .prefix("?")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild_settings` - Per-guild language and prefix rows
//! - `command_usage` - Command invocation counters
//! - `bot_setting` - Bot-wide key/value settings
//! - `helpers` - Unique id generation shared by all factories

pub mod bot_setting;
pub mod command_usage;
pub mod guild_settings;
pub mod helpers;

pub use bot_setting::create_bot_setting;
pub use command_usage::create_command_usage;
pub use guild_settings::create_guild_settings;
