use thiserror::Error;

/// Request-level failures. Each one halts processing and becomes an HTTP
/// error response.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Invalid request")]
    BadRequest,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("{0}")]
    Internal(String),
}

impl WebhookError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            WebhookError::BadRequest | WebhookError::InvalidSignature => 400,
            WebhookError::Internal(_) => 500,
        }
    }
}

impl From<RecipeBotError> for WebhookError {
    fn from(error: RecipeBotError) -> Self {
        WebhookError::Internal(error.to_string())
    }
}

/// Failures inside the bot's collaborators and pipeline stages.
#[derive(Debug, Error)]
pub enum RecipeBotError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse webhook payload: {0}")]
    ParseError(String),

    #[error("Failed to access LINE API: {0}")]
    LineApiError(String),

    #[error("Failed to store image: {0}")]
    StorageError(String),

    #[error("Failed to access Claude API: {0}")]
    ModelError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for RecipeBotError {
    fn from(error: reqwest::Error) -> Self {
        RecipeBotError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for RecipeBotError {
    fn from(error: anyhow::Error) -> Self {
        RecipeBotError::ConfigError(error.to_string())
    }
}

impl From<serde_json::Error> for RecipeBotError {
    fn from(error: serde_json::Error) -> Self {
        RecipeBotError::ParseError(error.to_string())
    }
}
