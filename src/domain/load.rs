use thiserror::Error;

use crate::domain::FeedItem;

/// The two ways a feed load can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The request never completed against the server.
    #[error("Could not reach the feed server")]
    Connectivity,

    /// A response arrived but could not be read as a feed.
    #[error("Received invalid feed data")]
    InvalidData,
}

/// Outcome of one `load` call. Items keep the server's order.
pub type LoadResult = std::result::Result<Vec<FeedItem>, LoadError>;
