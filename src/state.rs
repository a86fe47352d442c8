//! Shared state handed to every event handler.

use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::AppError,
    service::{level::LevelMetadataClient, pointercrate::PointercrateClient},
};

/// Resources shared by all handlers.
///
/// Every field is cheap to clone: the database connection is a pool and both API
/// clients share one reference counted `reqwest::Client`.
#[derive(Clone)]
pub struct BotState {
    pub db: DatabaseConnection,
    pub pointercrate: PointercrateClient,
    pub levels: LevelMetadataClient,
    /// How long a list session waits for the next button press.
    pub session_timeout: Duration,
    /// How long close-only messages such as about and help stay interactive.
    pub static_timeout: Duration,
    pub owner_id: Option<u64>,
    pub support_channel_id: Option<u64>,
}

/// Close-only messages stay up for five minutes.
const STATIC_TIMEOUT: Duration = Duration::from_secs(300);

impl BotState {
    /// Builds the state from configuration and already initialized resources.
    ///
    /// # Returns
    /// - `Ok(BotState)` - State ready to hand to the bot
    /// - `Err(AppError::ApiErr)` - A configured API URL is not absolute
    pub fn new(
        config: &Config,
        db: DatabaseConnection,
        http_client: reqwest::Client,
    ) -> Result<Self, AppError> {
        Ok(Self {
            db,
            pointercrate: PointercrateClient::new(http_client.clone(), &config.pointercrate_url)?,
            levels: LevelMetadataClient::new(http_client, &config.level_api_url)?,
            session_timeout: config.session_timeout,
            static_timeout: STATIC_TIMEOUT,
            owner_id: config.owner_id,
            support_channel_id: config.support_channel_id,
        })
    }
}
