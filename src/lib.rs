//! # Feed loader
//!
//! Fetches a JSON feed over HTTP, validates the response and decodes it
//! into typed items.
//!
//! ## Architecture
//!
//! ```text
//! HttpClient → RemoteFeedLoader → FeedItemsMapper → completion
//! ```
//!
//! - [`client`]: transport capability and its reqwest adapter
//! - [`loader`]: request orchestration and response decoding
//! - [`domain`]: `FeedItem` and the load outcome types
//!
//! ## Quick Start
//!
//! ```bash
//! # Load a feed once and print the items
//! feed-loader load https://example.com/feed.json
//!
//! # Same, as JSON
//! feed-loader load https://example.com/feed.json --json
//! ```
//!
//! ## Wire format
//!
//! ```json
//! { "items": [ { "id": "<uuid>", "image": "<url>", "description": "…", "location": "…" } ] }
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the configured HTTP
/// client to feed loaders.
pub mod app;

/// Command-line interface using clap.
///
/// - `load [url] [--json]` - Load a feed once and print its items
/// - `config` - Show the configuration in effect
pub mod cli;

/// HTTP transport.
///
/// - [`HttpClient`](client::HttpClient): Callback-based fetch capability
/// - [`ReqwestHttpClient`](client::ReqwestHttpClient): reqwest-based implementation
pub mod client;

/// Configuration loaded from `~/.config/feed-loader/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`FeedItem`](domain::FeedItem): A decoded feed entry
/// - [`LoadError`](domain::LoadError): `Connectivity` or `InvalidData`
/// - [`LoadResult`](domain::LoadResult): Outcome of a single load
pub mod domain;

/// Feed loading.
///
/// - [`RemoteFeedLoader`](loader::RemoteFeedLoader): Loads one URL through an `HttpClient`
/// - [`FeedItemsMapper`](loader::FeedItemsMapper): Status check and JSON decoding
/// - [`FeedLoader`](loader::FeedLoader): Async trait for awaiting a load
pub mod loader;

#[cfg(test)]
mod test_helpers;
