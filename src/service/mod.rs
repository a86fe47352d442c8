//! Service layer between command handlers and the data and API clients.
//!
//! Services orchestrate several repository or API calls and return domain models.
//! Remote calls fail with [`ApiError`](crate::error::api::ApiError); anything that
//! also touches the database fails with [`AppError`](crate::error::AppError).

pub mod demon;
pub mod guild_settings;
pub mod level;
pub mod player;
pub mod pointercrate;
pub mod presence;
