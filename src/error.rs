//! Custom error types for trip-mate
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the trip-mate application
#[derive(Error, Debug)]
pub enum TripMateError {
    /// Query or health request failed: non-2xx status, transport failure or
    /// an undecodable body. The payload is the short detail shown inline.
    #[error("Request failed: {0}\n\n  → Check that the Trip Mate server is running and reachable.\n  → Run 'tripmate health' to test the connection.")]
    RequestFailed(String),

    /// Endpoint URL could not be parsed or uses an unsupported scheme
    #[error("Invalid endpoint URL: {0}\n\n  → Expected format: http://host:port or https://host/path")]
    InvalidEndpoint(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl TripMateError {
    /// Short detail for the inline error region.
    ///
    /// Request failures carry their own one-line detail (`Server Error: 500`);
    /// everything else falls back to the first line of the full message.
    pub fn detail(&self) -> String {
        match self {
            TripMateError::RequestFailed(detail) => detail.clone(),
            other => other
                .to_string()
                .lines()
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl From<reqwest::Error> for TripMateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TripMateError::RequestFailed(format!("Malformed response: {}", err))
        } else {
            TripMateError::RequestFailed(err.to_string())
        }
    }
}

impl From<toml::de::Error> for TripMateError {
    fn from(err: toml::de::Error) -> Self {
        TripMateError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for TripMateError {
    fn from(err: toml::ser::Error) -> Self {
        TripMateError::Toml(err.to_string())
    }
}

impl From<url::ParseError> for TripMateError {
    fn from(err: url::ParseError) -> Self {
        TripMateError::InvalidEndpoint(err.to_string())
    }
}

/// Result type alias using TripMateError
pub type Result<T> = std::result::Result<T, TripMateError>;
