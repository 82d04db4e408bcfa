// src/core/net.rs
//
// The one remote call: POST a page window to the generation API, get books back.

use reqwest::blocking::Client;

use crate::config::{consts::USER_AGENT, options::NetOptions};
use crate::data::{PageRequest, PageResponse};
use crate::error::LoadError;

/// Where pages come from. The controller never talks HTTP directly, so tests
/// and the CLI can swap in anything that answers a `PageRequest`.
pub trait CatalogSource: Send + Sync {
    fn fetch(&self, request: &PageRequest) -> Result<PageResponse, LoadError>;
}

/// Blocking `reqwest` client against the real endpoint.
/// Call from a worker thread (GUI) or a plain main thread (CLI), never from async code.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(net: &NetOptions) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(net.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, url: net.api_url.clone() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for HttpSource {
    fn fetch(&self, request: &PageRequest) -> Result<PageResponse, LoadError> {
        logd!(
            "Net: POST {} start={} count={} seed={}",
            self.url, request.start_index, request.count, request.seed
        );

        let resp = self.client.post(&self.url).json(request).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        // Read text first so a bad body reports as Malformed, not Transport.
        let body = resp.text()?;
        let page: PageResponse = serde_json::from_str(&body)?;
        logd!("Net: OK books={} total={}", page.books.len(), page.total_generated);
        Ok(page)
    }
}
