// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP with reqwest.
//
// Key functionality:
// - One shared Client (connection pooling) with a per-request timeout
// - Follows a limited number of redirects
// - Non-2xx responses are failures, not pages
// - reqwest errors are sorted into timeout / connect / body / other
//
// Rust concepts:
// - async/await: the fetch is the crawler's main suspension point
// - Result<T, E>: failures are values, the crawler decides what to do
// =============================================================================

use super::Fetcher;
use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("docs-harvester/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 5;

/// Fetcher backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with the given per-request timeout.
    pub fn new(request_timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        debug!(url = %url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

// Sorts a reqwest error into the fetch error taxonomy
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect { url }
    } else if error.is_body() || error.is_decode() {
        FetchError::Body {
            url,
            message: error.to_string(),
        }
    } else {
        FetchError::Other {
            url,
            message: error.to_string(),
        }
    }
}
