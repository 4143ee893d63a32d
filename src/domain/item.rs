use serde::Serialize;
use url::Url;
use uuid::Uuid;

/// A single decoded feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "image")]
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(id: Uuid, image_url: Url) -> Self {
        Self {
            id,
            description: None,
            location: None,
            image_url,
        }
    }

    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("(no description)")
    }
}
