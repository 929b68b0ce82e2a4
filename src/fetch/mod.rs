// src/fetch/mod.rs
// =============================================================================
// The fetch capability: URL in, raw page source out.
//
// The crawler only knows about the Fetcher trait. HttpFetcher is the real
// implementation; tests use in-memory fakes.
// =============================================================================

mod http;

pub use http::HttpFetcher;

use crate::error::FetchResult;
use async_trait::async_trait;

/// Retrieves the raw content of a URL.
///
/// Implementations report transport problems as `Err` and never panic.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}
