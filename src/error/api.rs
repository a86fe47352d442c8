use thiserror::Error;

/// Failures talking to the ranking API or the level metadata API.
///
/// Each variant is distinguishable so callers can log precisely while still
/// rendering a single generic message to users.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, TLS or body read failure.
    #[error("Request to remote API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status. Pointercrate returns `{ code, message }` bodies.
    #[error("Remote API returned {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Pointercrate's own error code, when the body carried one
        code: Option<u32>,
        /// Error message from the body, or the status reason
        message: String,
    },

    /// Response body was not the JSON shape we expected.
    #[error("Failed to decode remote API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request or follow-up URL could not be built.
    #[error("Invalid remote API URL: {0}")]
    Url(#[from] url::ParseError),
}
