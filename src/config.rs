use std::{str::FromStr, time::Duration};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_POINTERCRATE_URL: &str = "https://pointercrate.com/";
const DEFAULT_LEVEL_API_URL: &str = "https://gdbrowser.com/";
const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 60;
/// Every 30 minutes, on the minute.
const DEFAULT_PRESENCE_CRON: &str = "0 */30 * * * *";

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    pub pointercrate_url: String,
    pub level_api_url: String,

    /// Discord user allowed to run superuser commands.
    pub owner_id: Option<u64>,
    /// Channel that receives guild join notices.
    pub support_channel_id: Option<u64>,

    pub session_timeout: Duration,
    pub presence_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            pointercrate_url: lookup("POINTERCRATE_URL")
                .unwrap_or_else(|| DEFAULT_POINTERCRATE_URL.to_string()),
            level_api_url: lookup("LEVEL_API_URL")
                .unwrap_or_else(|| DEFAULT_LEVEL_API_URL.to_string()),
            owner_id: parse_optional(&lookup, "BOT_OWNER_ID")?,
            support_channel_id: parse_optional(&lookup, "SUPPORT_CHANNEL_ID")?,
            session_timeout: Duration::from_secs(
                parse_optional(&lookup, "SESSION_TIMEOUT_SECS")?
                    .unwrap_or(DEFAULT_SESSION_TIMEOUT_SECS),
            ),
            presence_cron: lookup("PRESENCE_CRON")
                .unwrap_or_else(|| DEFAULT_PRESENCE_CRON.to_string()),
        })
    }
}

fn parse_optional<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
                value,
            }),
    }
}
