use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum CosmosError {
    /// Any failure reaching or decoding the remote article feed.
    #[error("{0}")]
    Fetch(String),

    /// Any failure writing the bookmark list.
    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    Share(String),

    #[error("Sharing is not available on this device")]
    ShareUnavailable,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Article not found: {0}")]
    ArticleNotFound(i64),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CosmosError>;
