use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Spotify request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Spotify API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode Spotify response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FetchError {
    /// HTTP status of a call the provider answered with a non-2xx code.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T, E = FetchError> = std::result::Result<T, E>;
