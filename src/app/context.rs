use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::app::error::{AppError, Result};
use crate::client::{HttpClient, ReqwestHttpClient};
use crate::config::Config;
use crate::loader::RemoteFeedLoader;

pub struct AppContext {
    pub config: Config,
    pub client: Arc<dyn HttpClient>,
}

impl AppContext {
    /// Build a context with a reqwest client configured from `config`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: Config) -> Result<Self> {
        let client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(&config.client)?);
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: Config, client: Arc<dyn HttpClient>) -> Self {
        Self { config, client }
    }

    /// Build a loader for `url`, falling back to the configured feed URL.
    pub fn loader(&self, url: Option<&str>) -> Result<Arc<RemoteFeedLoader>> {
        let raw = url
            .or(self.config.feed_url.as_deref())
            .ok_or(AppError::MissingFeedUrl)?;
        let url = Url::parse(raw)?;
        debug!("Creating loader for {}", url);

        Ok(RemoteFeedLoader::new(self.client.clone(), url))
    }
}
