// src/config.rs
// =============================================================================
// Static configuration for one crawl run.
//
// Everything here is decided before the crawl starts and never changes
// while it runs. The CLI builds a CrawlConfig, validate() checks it, and the
// crawler only ever reads it.
//
// Rust concepts:
// - Builder-style methods that take and return self
// - PathBuf for owned filesystem paths
// =============================================================================

use crate::classify::PageType;
use crate::error::ConfigError;
use crate::extract::{ContentExtractor, DEFAULT_CONTAINER};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_MAX_CONCURRENT: usize = 10;
pub const DEFAULT_SAVE_EVERY: usize = 50;
pub const DEFAULT_WRAP_WIDTH: usize = 100;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3600);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_OUTPUT_FILE: &str = "crawl_results.json";

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Root that scheme-less links are resolved against.
    pub site_root: String,
    /// First URL of the crawl (depth 0).
    pub entry_url: String,
    /// Only URLs on this host are fetched.
    pub allowed_domain: String,
    pub output_dir: PathBuf,
    pub output_file: String,
    pub max_depth: usize,
    /// Size of each batch of sibling crawls launched together.
    pub max_concurrent_crawls: usize,
    pub allowed_page_types: Vec<PageType>,
    /// Flush the sink every N visited pages (0 = only at the end).
    pub save_every: usize,
    /// Deadline for the whole crawl.
    pub timeout: Duration,
    /// Deadline for one HTTP request.
    pub request_timeout: Duration,
    /// CSS selector of the prose container; None reads the whole body.
    pub content_container: Option<String>,
    pub wrap_width: usize,
}

impl CrawlConfig {
    /// Defaults derived from the entry URL: its origin becomes the site
    /// root and its host the allowed domain.
    pub fn new(entry_url: &str) -> Result<Self, ConfigError> {
        let entry = parse_url("entry URL", entry_url)?;
        let host = entry
            .host_str()
            .ok_or_else(|| ConfigError::MissingHost(entry_url.to_string()))?
            .to_string();

        Ok(Self {
            site_root: entry.origin().ascii_serialization(),
            entry_url: entry_url.to_string(),
            allowed_domain: host,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_concurrent_crawls: DEFAULT_MAX_CONCURRENT,
            allowed_page_types: PageType::default_allowed(),
            save_every: DEFAULT_SAVE_EVERY,
            timeout: DEFAULT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            content_container: Some(DEFAULT_CONTAINER.to_string()),
            wrap_width: DEFAULT_WRAP_WIDTH,
        })
    }

    /// Overrides the site root; the allowed domain follows its host.
    pub fn with_site_root(mut self, site_root: &str) -> Result<Self, ConfigError> {
        let root = parse_url("site root", site_root)?;
        self.allowed_domain = root
            .host_str()
            .ok_or_else(|| ConfigError::MissingHost(site_root.to_string()))?
            .to_string();
        self.site_root = site_root.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_allowed_domain(mut self, domain: impl Into<String>) -> Self {
        self.allowed_domain = domain.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_concurrent_crawls(mut self, n: usize) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        self.max_concurrent_crawls = n;
        Ok(self)
    }

    pub fn with_output(mut self, dir: impl Into<PathBuf>, file: impl Into<String>) -> Self {
        self.output_dir = dir.into();
        self.output_file = file.into();
        self
    }

    pub fn with_page_types(mut self, page_types: Vec<PageType>) -> Self {
        if !page_types.is_empty() {
            self.allowed_page_types = page_types;
        }
        self
    }

    pub fn with_save_every(mut self, save_every: usize) -> Self {
        self.save_every = save_every;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_content_container(mut self, container: Option<String>) -> Self {
        self.content_container = container;
        self
    }

    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    /// Where flushed records are appended.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    pub fn is_allowed_type(&self, page_type: &PageType) -> bool {
        self.allowed_page_types.contains(page_type)
    }

    /// Builds the content extractor this configuration asks for.
    pub fn content_extractor(&self) -> Result<ContentExtractor, ConfigError> {
        match &self.content_container {
            Some(css) => ContentExtractor::with_container(css),
            None => Ok(ContentExtractor::full_body()),
        }
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
