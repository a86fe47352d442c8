//! Discord side of the bot.
//!
//! The gateway client is built in [`start`] and routes events through
//! [`handler::Handler`]. Slash commands live in [`command`], the messages they
//! render in [`embed`], and access checks in [`permission`].
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is needed: commands arrive as interactions, and guild create
//! events keep the cache populated with owners for the admin check.

pub mod command;
pub mod embed;
pub mod handler;
pub mod permission;
pub mod start;
