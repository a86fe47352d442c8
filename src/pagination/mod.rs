//! Interactive pagination sessions.
//!
//! A session belongs to one slash command invocation. It fetches a page from a
//! [`Listing`], renders it with back/follow/close controls, then waits for the
//! invoking user to press a control or pick an entry from a select menu. Each
//! wait is bounded by a timeout; when it elapses the controls are disabled in
//! place and the session ends.
//!
//! ```text
//! Initial -> Rendered <-> Rendered -> Closed | TimedOut | Errored | Selected
//! ```
//!
//! The controller never talks to Discord directly. It drives a
//! [`SessionTransport`], which the bot implements on top of the interaction and
//! a component collector, and which tests replace with an in-memory fake.

pub mod controller;
pub mod cursor;
pub mod event;
pub mod listing;
pub mod page;
pub mod transport;
pub mod view;

pub use controller::{PaginationController, SessionEnd, SessionFailure};
pub use cursor::PageCursor;
pub use event::{Incoming, NavigationEvent};
pub use listing::{Listing, Selection};
pub use page::{Page, RenderResult};
pub use transport::{InteractionTransport, SessionTransport};
pub use view::{EmbedField, EmbedView, PageView, SelectOption, ViewButton, ViewRow, ViewSelect};
