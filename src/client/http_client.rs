use reqwest::Client;
use tokio::runtime::Handle;
use tracing::{debug, warn};
use url::Url;

use crate::app::{AppError, Result};
use crate::client::{
    ClientConfig, ClientResult, Completion, CompletionGuard, HttpClient, HttpResponse,
};

/// [`HttpClient`] backed by reqwest.
///
/// Each `get` runs on the tokio runtime that was current when the client
/// was built, so completions are delivered from that runtime's workers and
/// never from inside `get` itself.
pub struct ReqwestHttpClient {
    client: Client,
    runtime: Handle,
}

impl ReqwestHttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .gzip(config.gzip)
            .brotli(config.brotli)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Self::with_client(client)
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: Client) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| AppError::Runtime(e.to_string()))?;
        Ok(Self { client, runtime })
    }
}

async fn perform(client: &Client, url: Url) -> ClientResult {
    let response = client.get(url).send().await?;

    let status = response.status();
    let url = response.url().clone();
    let body = response.bytes().await?.to_vec();

    Ok(HttpResponse { url, status, body })
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: Completion<ClientResult>) {
        let client = self.client.clone();
        let url = url.clone();
        let guard = CompletionGuard::new(completion);

        self.runtime.spawn(async move {
            debug!("GET {}", url);
            let result = perform(&client, url.clone()).await;

            match &result {
                Ok(response) => debug!(
                    "GET {} -> {} ({} bytes)",
                    url,
                    response.status,
                    response.body.len()
                ),
                Err(e) => warn!("GET {} failed: {}", url, e),
            }

            guard.complete(result);
        });
    }
}
