use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the HTTP client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Whole-request timeout in seconds (default: 10)
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// Accept gzip-compressed responses (default: true)
    pub gzip: bool,

    /// Accept brotli-compressed responses (default: true)
    pub brotli: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("feed-loader/", env!("CARGO_PKG_VERSION")).to_string(),
            gzip: true,
            brotli: true,
        }
    }
}

impl ClientConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
