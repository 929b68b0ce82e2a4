// src/crawl/state.rs
// =============================================================================
// The only state shared between concurrent crawl branches.
//
// - visited: every URL that has been claimed for fetching
// - page_count: how many URLs have been claimed (skipped pages included)
//
// Claiming is a single atomic check-and-insert, so when two branches find
// the same link at the same time exactly one of them gets to fetch it.
//
// Rust concepts:
// - DashSet: a HashSet that can be shared across tasks without a Mutex
// - AtomicUsize: a counter that many tasks can bump safely
// =============================================================================

use dashmap::DashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct CrawlState {
    visited: DashSet<String>,
    page_count: AtomicUsize,
}

impl CrawlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a URL for fetching.
    ///
    /// Returns the new page count if this call claimed the URL, or None if
    /// it had already been claimed.
    pub fn try_claim(&self, url: &str) -> Option<usize> {
        if self.visited.insert(url.to_string()) {
            Some(self.page_count.fetch_add(1, Ordering::SeqCst) + 1)
        } else {
            None
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count.load(Ordering::SeqCst)
    }
}
