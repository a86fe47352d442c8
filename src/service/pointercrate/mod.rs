//! Client for the Pointercrate demon list API.
//!
//! Every list endpoint pages with `limit`/`after` query parameters and announces
//! neighbouring pages through a `Links` response header. [`PointercrateClient`]
//! returns both as a [`Page`](crate::pagination::Page) so sessions can follow
//! either offsets or links.

pub mod client;
pub mod link;
pub mod query;

pub use client::PointercrateClient;
pub use link::PageLinks;
pub use query::{ListQuery, Resource};
