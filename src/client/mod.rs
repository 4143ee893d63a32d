pub mod config;
pub mod http_client;

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

pub use config::ClientConfig;
pub use http_client::ReqwestHttpClient;

/// One-shot callback handed to an [`HttpClient`].
pub type Completion<T> = Box<dyn FnOnce(T) + Send + 'static>;

/// A received HTTP response, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Final URL after redirects
    pub url: Url,
    pub status: StatusCode,
    /// Raw body, possibly empty
    pub body: Vec<u8>,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response representation: neither a response nor an error was produced")]
    UnexpectedRepresentation,
}

pub type ClientResult = std::result::Result<HttpResponse, ClientError>;

/// Transport capability consumed by the feed loader.
///
/// Implementations must call `completion` exactly once per `get`, with `Ok`
/// for any HTTP response received and `Err` only for transport failures.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: Completion<ClientResult>);
}

/// Makes sure a completion is reported even if the task driving it never
/// gets to report.
///
/// Dropping the guard without calling [`complete`](Self::complete) delivers
/// [`ClientError::UnexpectedRepresentation`].
pub(crate) struct CompletionGuard {
    completion: Option<Completion<ClientResult>>,
}

impl CompletionGuard {
    pub(crate) fn new(completion: Completion<ClientResult>) -> Self {
        Self {
            completion: Some(completion),
        }
    }

    pub(crate) fn complete(mut self, result: ClientResult) {
        if let Some(completion) = self.completion.take() {
            completion(result);
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(completion) = self.completion.take() {
            tracing::warn!("HTTP task ended without a result");
            completion(Err(ClientError::UnexpectedRepresentation));
        }
    }
}
