// src/error.rs
// =============================================================================
// Error types for the crawl components.
//
// The taxonomy:
// - InvalidUrl: a link that cannot be parsed into a URL (per-URL, non-fatal)
// - Fetch: transport failures while fetching a page (per-URL, non-fatal)
// - Persistence: a flush could not be written (logged, non-fatal)
// - Timeout: the overall crawl deadline expired (the only fatal error)
//
// Decode failures in embedded link payloads never surface here; the link
// extractor swallows them and returns whatever links it already collected.
//
// Rust concepts:
// - thiserror: derives std::error::Error + Display from attributes
// - #[from]: automatic conversion so the ? operator works across types
// =============================================================================

use std::time::Duration;
use thiserror::Error;

/// Errors raised while processing a single URL.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("persistence failed: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("crawl timed out after {0:?}")]
    Timeout(Duration),
}

/// Transport-level failures reported by a `Fetcher`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("could not connect to {url}")]
    Connect { url: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read body of {url}: {message}")]
    Body { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Other { url: String, message: String },
}

/// Failures while appending records to the output target.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize record {url}: {source}")]
    Serialize {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Invalid static configuration, detected before the crawl starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field} '{value}': {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("URL '{0}' has no host")]
    MissingHost(String),

    #[error("max concurrent crawls must be at least 1")]
    ZeroConcurrency,

    #[error("invalid content selector '{0}'")]
    InvalidSelector(String),
}

pub type CrawlResult<T> = std::result::Result<T, CrawlError>;
pub type FetchResult<T> = std::result::Result<T, FetchError>;
