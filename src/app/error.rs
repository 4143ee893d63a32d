use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::LoadError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to render configuration: {0}")]
    RenderConfig(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No tokio runtime available: {0}")]
    Runtime(String),

    #[error("No feed URL given and none configured")]
    MissingFeedUrl,

    #[error("Feed load failed: {0}")]
    Load(#[from] LoadError),
}

pub type Result<T> = std::result::Result<T, AppError>;
