use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{DexError, Result};

/// Base of the v1 API. Fixed; the service takes no configuration.
pub const BASE_URL: &str = "http://pokeapi.co";

/// Records fetched per catalog page.
pub const PAGE_LIMIT: u32 = 12;

pub fn first_page_url() -> String {
    format!("{}/api/v1/pokemon/?limit={}", BASE_URL, PAGE_LIMIT)
}

/// The server hands back `meta.next` as an absolute path; prepend the host.
pub fn next_page_url(next: &str) -> String {
    format!("{}{}", BASE_URL, next)
}

pub fn detail_url(name: &str) -> String {
    format!("{}/api/v1/pokemon/{}/", BASE_URL, name.to_lowercase())
}

/// One asynchronous GET. Resolves with the raw body; callers parse.
/// Implementations must not retry and must not cache.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for HttpClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DexError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "request failed");
            return Err(DexError::Http {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| DexError::Transport(e.to_string()))
    }
}
