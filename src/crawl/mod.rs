// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a documentation site.
//
// Features:
// - Recursive crawling from an entry URL, depth-bounded
// - Same-domain restriction (doesn't crawl external sites)
// - Shared visited set so no URL is fetched twice, even under concurrency
// - Children crawled in fixed-size concurrent batches
//
// Rust concepts:
// - Async programming: concurrent fetches of sibling pages
// - Shared state: DashSet + AtomicUsize behind a shared reference
// =============================================================================

mod orchestrator;
mod state;

pub use orchestrator::Crawler;
pub use state::CrawlState;
