//! Shared test doubles and fixtures.

use std::sync::Mutex;

use reqwest::StatusCode;
use serde_json::{json, Map, Value};
use url::Url;
use uuid::Uuid;

use crate::client::{ClientError, ClientResult, Completion, HttpClient, HttpResponse};
use crate::domain::FeedItem;

type Message = (Url, Option<Completion<ClientResult>>);

/// Records every `get` and holds its completion until the test fires it.
#[derive(Default)]
pub(crate) struct HttpClientSpy {
    messages: Mutex<Vec<Message>>,
}

impl HttpClientSpy {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn requested_urls(&self) -> Vec<Url> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub(crate) fn complete_with_error(&self, error: ClientError, index: usize) {
        let completion = self.take_completion(index);
        completion(Err(error));
    }

    pub(crate) fn complete_with_status(&self, code: u16, data: Vec<u8>, index: usize) {
        let url = self.messages.lock().unwrap()[index].0.clone();
        let response = HttpResponse {
            url,
            status: StatusCode::from_u16(code).unwrap(),
            body: data,
        };
        let completion = self.take_completion(index);
        completion(Ok(response));
    }

    /// Drop the completion at `index` without calling it.
    pub(crate) fn discard(&self, index: usize) {
        drop(self.take_completion(index));
    }

    // Taken out of the lock so completions may call back into the spy.
    fn take_completion(&self, index: usize) -> Completion<ClientResult> {
        self.messages.lock().unwrap()[index]
            .1
            .take()
            .expect("request already completed")
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: Completion<ClientResult>) {
        self.messages
            .lock()
            .unwrap()
            .push((url.clone(), Some(completion)));
    }
}

pub(crate) fn any_url() -> Url {
    Url::parse("https://example.com/feed").unwrap()
}

/// A domain item together with its wire representation. Optional fields
/// that are `None` are left out of the JSON entirely.
pub(crate) fn make_item(
    description: Option<&str>,
    location: Option<&str>,
    image_url: &str,
) -> (FeedItem, Value) {
    let id = Uuid::new_v4();
    let image_url = Url::parse(image_url).unwrap();

    let mut item = FeedItem::new(id, image_url.clone());
    item.description = description.map(String::from);
    item.location = location.map(String::from);

    let mut wire = Map::new();
    wire.insert("id".into(), json!(id.to_string()));
    wire.insert("image".into(), json!(image_url.as_str()));
    if let Some(description) = description {
        wire.insert("description".into(), json!(description));
    }
    if let Some(location) = location {
        wire.insert("location".into(), json!(location));
    }

    (item, Value::Object(wire))
}

pub(crate) fn make_items_json(items: Vec<Value>) -> Vec<u8> {
    serde_json::to_vec(&json!({ "items": items })).unwrap()
}
