//! Client for the level metadata API.
//!
//! Pointercrate does not know a level's in-game difficulty, so demon details look
//! it up on a GDBrowser compatible server to pick the thumbnail face.

use reqwest::StatusCode;
use url::Url;

use crate::{
    error::api::ApiError,
    model::level::{DemonDifficulty, LevelInfo},
};

#[derive(Clone)]
pub struct LevelMetadataClient {
    http: reqwest::Client,
    base: Url,
}

impl LevelMetadataClient {
    pub fn new(http: reqwest::Client, base: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http,
            base: Url::parse(base)?,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Demon difficulty of a level.
    ///
    /// # Returns
    /// - `Ok(Some(difficulty))` - Level exists and is rated as a demon
    /// - `Ok(None)` - Level is unknown to the server or not a demon
    /// - `Err(ApiError)` - Request or decoding failed
    pub async fn difficulty(&self, level_id: u64) -> Result<Option<DemonDifficulty>, ApiError> {
        let url = self.base.join(&format!("api/level/{level_id}"))?;
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        decode_difficulty(status, &body)
    }
}

/// GDBrowser answers unknown levels with a bare `-1`.
pub fn decode_difficulty(status: StatusCode, body: &str) -> Result<Option<DemonDifficulty>, ApiError> {
    if body.trim() == "-1" {
        return Ok(None);
    }

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            code: None,
            message: status.canonical_reason().unwrap_or("Unknown status").to_string(),
        });
    }

    let level: LevelInfo = serde_json::from_str(body)?;

    Ok(DemonDifficulty::from_label(&level.difficulty))
}
