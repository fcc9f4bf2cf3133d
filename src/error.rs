//! Error types for the Supabase secrets CLI

use thiserror::Error;

/// Result type alias for secrets operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidInput(String),
}

/// API-related errors
///
/// `Network`, `Timeout` and `Cancelled` come from the transport and are passed
/// through untouched. `UnexpectedStatus` means the API answered, but not with
/// the status the operation expects.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Unexpected error {action} project secrets: {body}")]
    UnexpectedStatus { action: &'static str, body: String },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Build an `UnexpectedStatus` error around the response body text.
    pub fn unexpected_status(action: &'static str, body: impl Into<String>) -> Self {
        ApiError::UnexpectedStatus {
            action,
            body: body.into(),
        }
    }

    /// Whether this error originated in the transport rather than the API.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Timeout | ApiError::Cancelled
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect to API: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(
        "Access token not provided. Supply an access token with --access-token or the SUPABASE_ACCESS_TOKEN environment variable."
    )]
    MissingAccessToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
