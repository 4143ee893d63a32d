pub mod mapper;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::oneshot;
use url::Url;

use crate::client::{ClientResult, HttpClient};
use crate::domain::{LoadError, LoadResult};

pub use mapper::FeedItemsMapper;

/// Anything that can produce a feed on demand.
#[async_trait]
pub trait FeedLoader: Send + Sync {
    async fn load_feed(&self) -> LoadResult;
}

/// Loads feed items from a single remote URL through an [`HttpClient`].
pub struct RemoteFeedLoader {
    client: Arc<dyn HttpClient>,
    url: Url,
}

impl RemoteFeedLoader {
    pub fn new(client: Arc<dyn HttpClient>, url: Url) -> Arc<Self> {
        Arc::new(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request the feed once and report the outcome to `completion`.
    ///
    /// `completion` runs on whatever context the client delivers on, at
    /// most once. If every `Arc` to this loader has been dropped by the time
    /// the client answers, the result is discarded and `completion` never
    /// runs.
    pub fn load<F>(self: &Arc<Self>, completion: F)
    where
        F: FnOnce(LoadResult) + Send + 'static,
    {
        let loader = Arc::downgrade(self);
        self.client.get(
            &self.url,
            Box::new(move |result| {
                if loader.upgrade().is_none() {
                    return;
                }
                completion(Self::map(result));
            }),
        );
    }

    fn map(result: ClientResult) -> LoadResult {
        match result {
            Ok(response) => FeedItemsMapper::map(&response.body, response.status),
            Err(_) => Err(LoadError::Connectivity),
        }
    }
}

#[async_trait]
impl FeedLoader for RemoteFeedLoader {
    /// Awaitable form of [`load`](RemoteFeedLoader::load). Dropping the
    /// future drops the receiving end, so a late result goes nowhere.
    async fn load_feed(&self) -> LoadResult {
        let (tx, rx) = oneshot::channel();
        self.client.get(
            &self.url,
            Box::new(move |result| {
                let _ = tx.send(Self::map(result));
            }),
        );

        // A client that drops the callback never completed the exchange.
        rx.await.unwrap_or(Err(LoadError::Connectivity))
    }
}
