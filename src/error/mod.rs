//! Error types for the bot.
//!
//! `AppError` is the top-level error that command handlers, event handlers and
//! scheduled jobs propagate with `?`. Domain-specific errors (configuration,
//! ranking API, internal invariants) are wrapped via `#[from]` so call sites can
//! stay terse. Errors are never shown verbatim to Discord users; handlers log
//! them and reply with a translated generic message instead.

pub mod api;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{api::ApiError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Ranking or level metadata API failure.
    ///
    /// Sessions surface these as the generic "unknown error" terminal state.
    #[error(transparent)]
    ApiErr(#[from] ApiError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected state inside the bot itself.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid command input.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
