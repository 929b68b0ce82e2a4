// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Subcommands:
// - crawl: crawl a documentation site and write extracted records
// - classify: show which page type a URL gets
//
// Rust concepts:
// - Derive macros: clap generates the parser from the structs below
// - Enums: one variant per subcommand
// =============================================================================

use crate::classify::PageType;
use crate::config::{
    CrawlConfig, DEFAULT_MAX_CONCURRENT, DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_DIR,
    DEFAULT_OUTPUT_FILE, DEFAULT_SAVE_EVERY, DEFAULT_TIMEOUT, DEFAULT_WRAP_WIDTH,
};
use crate::error::ConfigError;
use crate::extract::DEFAULT_CONTAINER;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "docs-harvester",
    version,
    about = "Crawl a documentation site and extract structured page content",
    long_about = "docs-harvester walks a documentation site from an entry page, classifies each page, \
                  extracts prose, tables, code and images from supported pages, and appends the \
                  results to a JSON output file."
)]
pub struct Cli {
    /// Log at debug level when RUST_LOG is not set
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a site starting from an entry URL
    ///
    /// Example: docs-harvester crawl https://docs.aws.amazon.com/ec2/index.html --max-depth 3
    Crawl(CrawlArgs),

    /// Print the page type the built-in classifier assigns to a URL
    ///
    /// Example: docs-harvester classify https://docs.aws.amazon.com/lambda/latest/dg/welcome.html
    Classify {
        /// URL to classify
        url: String,
    },
}

#[derive(Args, Debug)]
pub struct CrawlArgs {
    /// First page of the crawl (depth 0)
    pub entry_url: String,

    /// Root that relative links are resolved against (default: origin of the entry URL)
    #[arg(long)]
    pub site_root: Option<String>,

    /// Only crawl URLs on this host (default: host of the site root)
    #[arg(long)]
    pub allowed_domain: Option<String>,

    /// Directory the output file is written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Output file name; records are appended to it
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Maximum link depth below the entry URL
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// How many sibling pages are crawled at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT)]
    pub max_concurrent: usize,

    /// Page types to extract (repeatable; default: UserGuidePage, DevGuidePage, InstanceTypePage)
    #[arg(long = "page-type")]
    pub page_types: Vec<String>,

    /// Flush results every N visited pages (0 = only at the end)
    #[arg(long, default_value_t = DEFAULT_SAVE_EVERY)]
    pub save_every: usize,

    /// Give up on the whole crawl after this many seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// CSS selector of the element holding the page prose
    #[arg(long, default_value = DEFAULT_CONTAINER, conflicts_with = "full_body")]
    pub content_selector: String,

    /// Read prose from the whole body instead of a content container
    #[arg(long)]
    pub full_body: bool,

    /// Wrap prose fields at this column (0 = no wrapping)
    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    pub wrap_width: usize,

    /// Print the crawl summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl CrawlArgs {
    /// Validates the arguments into a crawl configuration.
    pub fn to_config(&self) -> Result<CrawlConfig, ConfigError> {
        let mut config = CrawlConfig::new(&self.entry_url)?;
        if let Some(root) = &self.site_root {
            config = config.with_site_root(root)?;
        }
        if let Some(domain) = &self.allowed_domain {
            config = config.with_allowed_domain(domain.clone());
        }

        let page_types = self
            .page_types
            .iter()
            .filter_map(|tag| tag.parse::<PageType>().ok())
            .collect();
        let container = (!self.full_body).then(|| self.content_selector.clone());

        let config = config
            .with_output(self.output_dir.clone(), self.output_file.clone())
            .with_max_depth(self.max_depth)
            .with_max_concurrent_crawls(self.max_concurrent)?
            .with_page_types(page_types)
            .with_save_every(self.save_every)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_content_container(container)
            .with_wrap_width(self.wrap_width);

        // fail early on a bad selector rather than on the first page
        config.content_extractor()?;
        Ok(config)
    }
}
