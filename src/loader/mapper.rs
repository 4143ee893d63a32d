use reqwest::StatusCode;
use serde::{Deserialize, Deserializer};
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::domain::{FeedItem, LoadError, LoadResult};

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

#[derive(Deserialize)]
struct RemoteFeedItem {
    #[serde(deserialize_with = "hyphenated_uuid")]
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

/// Accepts only the 8-4-4-4-12 form; simple, braced and URN spellings are
/// rejected even though `Uuid::parse_str` would take them.
fn hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let well_formed = raw.len() == 36
        && raw.char_indices().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_hexdigit(),
        });
    if !well_formed {
        return Err(serde::de::Error::custom(format!("malformed UUID: {raw}")));
    }
    Uuid::parse_str(&raw).map_err(serde::de::Error::custom)
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        Self {
            id: item.id,
            description: item.description,
            location: item.location,
            image_url: item.image,
        }
    }
}

/// Turns a raw HTTP response into feed items.
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Validate the status and decode the `{"items": [...]}` envelope.
    ///
    /// Any non-200 status, malformed JSON, or invalid item fails the whole
    /// envelope with [`LoadError::InvalidData`].
    pub fn map(data: &[u8], status: StatusCode) -> LoadResult {
        if status != StatusCode::OK {
            debug!("Rejecting feed response with status {}", status);
            return Err(LoadError::InvalidData);
        }

        let root: Root = serde_json::from_slice(data).map_err(|e| {
            debug!("Failed to decode feed envelope: {}", e);
            LoadError::InvalidData
        })?;

        Ok(root.items.into_iter().map(FeedItem::from).collect())
    }
}
