//! Test fixtures providing reusable API payloads without network access.
//!
//! Fixtures build the JSON documents the Pointercrate API returns so that tests can
//! deserialize them into the bot's models or feed them to fake page sources.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::pointercrate;
//!
//! let demon = pointercrate::demon(1, "Tidal Wave");
//! let page = pointercrate::ranking_page(1, 25);
//! ```

pub mod pointercrate;
