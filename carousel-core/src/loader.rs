//! Item loading over HTTP.
//!
//! The `ItemSource` trait abstracts the fetch so the screen can be driven by
//! canned data in tests. `HttpItemSource` performs a single GET with no
//! headers, query, or auth and decodes a JSON array of items.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::item::Item;

/// Structured errors for the one fetch a mount performs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not a JSON array of items: {message}")]
    Decode { url: String, message: String },
}

/// Anything that can produce the carousel's items.
pub trait ItemSource: Send + Sync {
    /// Where the items come from, for logs.
    fn describe(&self) -> &str;

    fn fetch_items(&self) -> Result<Vec<Item>, LoadError>;
}

/// Blocking HTTP source for a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpItemSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpItemSource {
    /// Build a source for `url`. `timeout` of `None` waits indefinitely.
    ///
    /// System proxies are bypassed: the endpoint is a local service.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, LoadError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(|e| LoadError::Client(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ItemSource for HttpItemSource {
    fn describe(&self) -> &str {
        &self.url
    }

    fn fetch_items(&self) -> Result<Vec<Item>, LoadError> {
        info!(event = "core.loader.fetch_started", url = %self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| LoadError::Network {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| LoadError::Network {
            url: self.url.clone(),
            message: e.to_string(),
        })?;
        let items = parse_items(&body).map_err(|e| LoadError::Decode {
            url: self.url.clone(),
            message: e.to_string(),
        })?;

        debug!(event = "core.loader.payload", url = %self.url, body = %body);
        info!(
            event = "core.loader.fetch_completed",
            url = %self.url,
            items = items.len()
        );
        Ok(items)
    }
}

/// Decode a payload body into items, preserving order.
pub fn parse_items(body: &str) -> Result<Vec<Item>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Fixed in-memory source.
#[derive(Debug, Clone, Default)]
pub struct StaticItemSource {
    items: Vec<Item>,
}

impl StaticItemSource {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl ItemSource for StaticItemSource {
    fn describe(&self) -> &str {
        "static"
    }

    fn fetch_items(&self) -> Result<Vec<Item>, LoadError> {
        Ok(self.items.clone())
    }
}
