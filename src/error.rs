use thiserror::Error;

/// Errors raised by the upstream clients, the token cache and configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Upstream returned an error: {0}")]
    Upstream(String),

    #[error("Response is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Access token was rejected")]
    Unauthorized,

    #[error("Configuration error: {0}")]
    Config(String),
}
