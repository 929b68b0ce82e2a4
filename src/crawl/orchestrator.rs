// src/crawl/orchestrator.rs
// =============================================================================
// The crawl engine: depth-bounded, deduplicated, batch-concurrent traversal.
//
// How one URL is handled:
// 1. Drop it if it's too deep, excluded (.pdf/.rss/#), or off-domain
// 2. Claim it in the visited set (an already-claimed URL stops here)
// 3. Fetch it; an empty page stops here
// 4. Run the page filter:
//      Skip      -> stop, nothing extracted, no links followed
//      Navigate  -> no record, but links are followed
//      Extract   -> classify; supported types become a record for the sink
// 5. Harvest links and crawl them at depth + 1, one batch at a time
//
// Fan-out: a page's children are split into batches of max_concurrent_crawls.
// Each batch runs concurrently and must finish before the next one starts.
// The cap applies per page, not globally: every running child can open its
// own batch, so total in-flight fetches can exceed max_concurrent_crawls.
//
// Errors: anything that goes wrong for one URL (bad URL, fetch failure) is
// logged and turned into an empty result for that branch. Siblings and
// ancestors carry on. Only the overall timeout fails the crawl.
//
// Rust concepts:
// - BoxFuture: async recursion needs a boxed future with a known size
// - join_all: run a batch of futures concurrently and wait for all of them
// - Arc<dyn Trait>: shared, swappable fetcher/classifier implementations
// =============================================================================

use super::state::CrawlState;
use crate::classify::Classifier;
use crate::config::CrawlConfig;
use crate::error::{ConfigError, CrawlError, CrawlResult};
use crate::extract::ContentExtractor;
use crate::fetch::Fetcher;
use crate::filter::{self, PageOutcome};
use crate::links::{extract_links, is_allowed_host, is_excluded, is_non_navigable, normalize_url};
use crate::record::CrawlRecord;
use crate::sink::ContentSink;
use futures::future::{join_all, BoxFuture, FutureExt};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// How many sibling crawls one page may launch at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOut {
    batch_size: NonZeroUsize,
}

impl FanOut {
    pub fn new(batch_size: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(batch_size)
            .map(|batch_size| Self { batch_size })
            .ok_or(ConfigError::ZeroConcurrency)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    /// Splits a frontier into the batches that run one after another.
    pub fn batches<'a, T>(&self, frontier: &'a [T]) -> std::slice::Chunks<'a, T> {
        frontier.chunks(self.batch_size.get())
    }
}

pub struct Crawler {
    config: CrawlConfig,
    fetcher: Arc<dyn Fetcher>,
    classifier: Arc<dyn Classifier>,
    extractor: ContentExtractor,
    sink: Arc<ContentSink>,
    fan_out: FanOut,
}

impl Crawler {
    pub fn new(
        config: CrawlConfig,
        fetcher: Arc<dyn Fetcher>,
        classifier: Arc<dyn Classifier>,
        sink: Arc<ContentSink>,
    ) -> Result<Self, ConfigError> {
        let extractor = config.content_extractor()?;
        let fan_out = FanOut::new(config.max_concurrent_crawls)?;
        Ok(Self {
            config,
            fetcher,
            classifier,
            extractor,
            sink,
            fan_out,
        })
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Crawls from the configured entry URL until the frontier is exhausted
    /// or the overall timeout fires.
    ///
    /// Returns the URLs that produced a record. On timeout, in-flight work is
    /// dropped and records already handed to the sink stay buffered there.
    pub async fn run(&self, state: &CrawlState) -> CrawlResult<Vec<String>> {
        let entry = self.config.entry_url.clone();
        info!(
            entry = %entry,
            max_depth = self.config.max_depth,
            batch_size = self.fan_out.batch_size(),
            "starting crawl"
        );

        tokio::time::timeout(self.config.timeout, self.crawl(state, entry, 0, self.fan_out))
            .await
            .map_err(|_| CrawlError::Timeout(self.config.timeout))
    }

    /// Crawls one URL and everything reachable from it.
    ///
    /// Never fails: errors for this URL are logged and become an empty result.
    pub fn crawl<'a>(
        &'a self,
        state: &'a CrawlState,
        url: String,
        depth: usize,
        fan_out: FanOut,
    ) -> BoxFuture<'a, Vec<String>> {
        async move {
            match self.crawl_page(state, &url, depth, fan_out).await {
                Ok(extracted) => extracted,
                Err(e) => {
                    warn!(url = %url, depth, error = %e, "failed to crawl page");
                    Vec::new()
                }
            }
        }
        .boxed()
    }

    async fn crawl_page(
        &self,
        state: &CrawlState,
        raw_url: &str,
        depth: usize,
        fan_out: FanOut,
    ) -> CrawlResult<Vec<String>> {
        // Hard ceiling: nothing below max_depth is ever fetched
        if depth > self.config.max_depth {
            return Ok(Vec::new());
        }

        // Resolve relative links against the site root before any check,
        // so the visited set only ever sees absolute URLs
        let url = normalize_url(raw_url, &self.config.site_root);
        if is_excluded(&url) {
            debug!(url = %url, "excluded link");
            return Ok(Vec::new());
        }
        // An unparseable URL is an error for this branch only (the ? ends up
        // in crawl(), which logs it)
        if !is_allowed_host(&url, &self.config.allowed_domain)? {
            debug!(url = %url, "outside allowed domain");
            return Ok(Vec::new());
        }

        // Check-and-insert in one step: of two branches racing for the same
        // link, only one gets Some
        let Some(page_number) = state.try_claim(&url) else {
            return Ok(Vec::new());
        };
        info!(url = %url, depth, page = page_number, "crawling");

        // Periodic save every save_every claimed pages (0 = only at the end)
        if self.config.save_every > 0 && page_number % self.config.save_every == 0 {
            self.flush_sink().await;
        }

        // Suspension point: other branches make progress while we wait
        let body = self.fetcher.fetch(&url).await?;
        if body.trim().is_empty() {
            debug!(url = %url, "empty page");
            return Ok(Vec::new());
        }

        // URLs of pages that produced a record, here and below
        let mut extracted = Vec::new();
        match filter::evaluate(&body) {
            PageOutcome::Skip(reason) => {
                info!(url = %url, %reason, "skipping page");
                return Ok(extracted);
            }
            PageOutcome::Navigate(kind) => {
                info!(url = %url, %kind, "navigation page, following links only");
            }
            PageOutcome::Extract => {
                // Only allow-listed page types become records; the others are
                // still crawled for links below
                let page_type = self.classifier.classify(&url).await;
                if self.config.is_allowed_type(&page_type) {
                    let content = self.extractor.extract_html(&body);
                    self.sink
                        .push(CrawlRecord::new(url.clone(), page_type, &content))
                        .await;
                    extracted.push(url.clone());
                } else {
                    debug!(url = %url, %page_type, "unsupported page type, not extracting");
                }
            }
        }

        // Children would land at depth + 1 > max_depth, so don't even look
        if depth >= self.config.max_depth {
            return Ok(extracted);
        }

        // mailto:/tel:/javascript: links can't be fetched at all
        let frontier: Vec<String> = extract_links(&body)
            .into_iter()
            .filter(|link| !is_non_navigable(link))
            .collect();
        debug!(url = %url, links = frontier.len(), "harvested links");

        extracted.extend(self.crawl_frontier(state, &frontier, depth + 1, fan_out).await);
        Ok(extracted)
    }

    // Runs the frontier batch by batch; results are flattened, dedup is the
    // visited set's job
    async fn crawl_frontier(
        &self,
        state: &CrawlState,
        frontier: &[String],
        depth: usize,
        fan_out: FanOut,
    ) -> Vec<String> {
        let mut extracted = Vec::new();
        for batch in fan_out.batches(frontier) {
            // Start every crawl in this batch, then wait for all of them
            // before the next batch starts
            let crawls = batch
                .iter()
                .map(|link| self.crawl(state, link.clone(), depth, fan_out));
            for urls in join_all(crawls).await {
                extracted.extend(urls);
            }
        }
        extracted
    }

    async fn flush_sink(&self) {
        if let Err(e) = self.sink.flush().await {
            error!(error = %e, "periodic flush failed, records of this cycle are lost");
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does crawl() return a BoxFuture instead of being an async fn?
//    - An async fn that calls itself would have an infinitely sized future
//    - Boxing the future (.boxed()) gives it a fixed size on the heap
//    - BoxFuture<'a, T> is just Pin<Box<dyn Future<Output = T> + Send + 'a>>
//
// 2. Why join_all over chunks instead of spawning tasks?
//    - join_all polls the futures of one batch concurrently on the current task
//    - The futures can borrow self and state, no Arc or 'static needed
//    - chunks() gives the batches; the for loop makes them run one at a time
//
// 3. Why does crawl() swallow errors?
//    - One bad link must not stop its siblings or its parent
//    - crawl_page() uses ? freely; crawl() is the one place that logs the
//      error and turns it into an empty result
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::PageType;
    use crate::error::{FetchError, FetchResult};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    const ROOT: &str = "https://docs.example.com";

    // Serves pages from memory and records every fetch
    #[derive(Default)]
    struct FakeFetcher {
        pages: HashMap<String, String>,
        fetches: Mutex<Vec<String>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        delay: Option<Duration>,
    }

    impl FakeFetcher {
        fn with_pages(pages: &[(&str, String)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(path, html)| (format!("{}{}", ROOT, path), html.clone()))
                    .collect(),
                ..Default::default()
            }
        }

        fn fetched(&self) -> Vec<String> {
            self.fetches.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> FetchResult<String> {
            self.fetches.lock().unwrap().push(url.to_string());
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    // Everything under /guide/ is a user guide page, the rest is unknown
    struct FakeClassifier;

    #[async_trait]
    impl Classifier for FakeClassifier {
        async fn classify(&self, url: &str) -> PageType {
            if url.contains("/guide/") {
                PageType::UserGuidePage
            } else {
                PageType::Other("Unknown".to_string())
            }
        }
    }

    fn page(body: &str) -> String {
        format!("<html><head><title>T</title></head><body><div id=\"main-col-body\">{}</div></body></html>", body)
    }

    struct Harness {
        crawler: Crawler,
        fetcher: Arc<FakeFetcher>,
        sink: Arc<ContentSink>,
        state: CrawlState,
        _dir: tempfile::TempDir,
    }

    fn harness(fetcher: FakeFetcher, entry: &str, max_depth: usize, batch: usize) -> Harness {
        saving_harness(fetcher, entry, max_depth, batch, 0)
    }

    fn saving_harness(
        fetcher: FakeFetcher,
        entry: &str,
        max_depth: usize,
        batch: usize,
        save_every: usize,
    ) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let config = CrawlConfig::new(&format!("{}{}", ROOT, entry))
            .unwrap()
            .with_max_depth(max_depth)
            .with_max_concurrent_crawls(batch)
            .unwrap()
            .with_save_every(save_every)
            .with_output(dir.path(), "results.json");

        let fetcher = Arc::new(fetcher);
        let sink = Arc::new(ContentSink::new(config.output_path(), 100));
        let crawler = Crawler::new(
            config,
            fetcher.clone(),
            Arc::new(FakeClassifier),
            sink.clone(),
        )
        .unwrap();

        Harness {
            crawler,
            fetcher,
            sink,
            state: CrawlState::new(),
            _dir: dir,
        }
    }

    fn sorted(mut urls: Vec<String>) -> Vec<String> {
        urls.sort();
        urls
    }

    fn landing(body: &str) -> String {
        format!(
            r#"<html><head><meta name="page-type" content="landing-page"></head><body>{}</body></html>"#,
            body
        )
    }

    #[tokio::test]
    async fn test_end_to_end_two_records_without_duplicates() {
        // E links to L and to hub N; N links to L again
        let fetcher = FakeFetcher::with_pages(&[
            ("/guide/e.html", page(r#"<p>Entry</p><a href="/guide/l.html">L</a><a href="/guide/n.html">N</a><a href="/guide/l.html">L again</a>"#)),
            ("/guide/l.html", page("<p>Leaf</p>")),
            ("/guide/n.html", landing(r#"<a href="/guide/l.html">L</a>"#)),
        ]);
        let h = harness(fetcher, "/guide/e.html", 1, 10);

        let extracted = h.crawler.run(&h.state).await.unwrap();
        assert_eq!(
            sorted(extracted),
            vec![format!("{}/guide/e.html", ROOT), format!("{}/guide/l.html", ROOT)]
        );

        let report = h.sink.flush().await.unwrap();
        assert_eq!(report.written, 2);

        let l_fetches = h
            .fetcher
            .fetched()
            .iter()
            .filter(|u| u.ends_with("/guide/l.html"))
            .count();
        assert_eq!(l_fetches, 1);
    }

    #[tokio::test]
    async fn test_link_reached_through_two_branches_is_crawled_once() {
        // at depth 2, L is reachable from E directly and through hub N
        let fetcher = FakeFetcher::with_pages(&[
            ("/guide/e.html", page(r#"<a href="/guide/n.html">N</a><a href="/guide/l.html">L</a>"#)),
            ("/guide/n.html", landing(r#"<a href="/guide/l.html">L</a>"#)),
            ("/guide/l.html", page("<p>Leaf</p>")),
        ]);
        let h = harness(fetcher, "/guide/e.html", 2, 10);

        let extracted = h.crawler.run(&h.state).await.unwrap();

        assert_eq!(extracted.len(), 2);
        assert_eq!(h.fetcher.fetched().len(), 3);
        assert_eq!(h.state.page_count(), 3);
    }

    #[tokio::test]
    async fn test_depth_beyond_max_does_nothing() {
        let fetcher = FakeFetcher::with_pages(&[("/guide/a.html", page("<p>A</p>"))]);
        let h = harness(fetcher, "/guide/a.html", 1, 10);

        let extracted = h
            .crawler
            .crawl(&h.state, format!("{}/guide/a.html", ROOT), 2, h.crawler.fan_out)
            .await;

        assert!(extracted.is_empty());
        assert!(h.fetcher.fetched().is_empty());
        assert_eq!(h.state.page_count(), 0);
    }

    #[tokio::test]
    async fn test_max_depth_is_a_hard_ceiling() {
        let fetcher = FakeFetcher::with_pages(&[
            ("/guide/0.html", page(r#"<a href="/guide/1.html">1</a>"#)),
            ("/guide/1.html", page(r#"<a href="/guide/2.html">2</a>"#)),
            ("/guide/2.html", page(r#"<a href="/guide/3.html">3</a>"#)),
        ]);
        let h = harness(fetcher, "/guide/0.html", 1, 10);

        h.crawler.run(&h.state).await.unwrap();

        assert_eq!(
            sorted(h.fetcher.fetched()),
            vec![
                format!("{}/guide/0.html", ROOT),
                format!("{}/guide/1.html", ROOT),
            ]
        );
    }

    #[tokio::test]
    async fn test_visited_url_is_not_fetched_again() {
        let fetcher = FakeFetcher::with_pages(&[("/guide/a.html", page("<p>A</p>"))]);
        let h = harness(fetcher, "/guide/a.html", 1, 10);
        let url = format!("{}/guide/a.html", ROOT);

        let first = h.crawler.crawl(&h.state, url.clone(), 0, h.crawler.fan_out).await;
        let second = h.crawler.crawl(&h.state, url, 0, h.crawler.fan_out).await;

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert_eq!(h.fetcher.fetched().len(), 1);
        assert_eq!(h.sink.pending().await, 1);
    }

    #[tokio::test]
    async fn test_landing_page_has_no_record_but_links_are_followed() {
        let landing = r#"<html><head><meta name="page-type" content="landing-page"></head>
            <body><a href="/guide/child.html">Child</a></body></html>"#;
        let fetcher = FakeFetcher::with_pages(&[
            ("/guide/index.html", landing.to_string()),
            ("/guide/child.html", page("<p>Child</p>")),
        ]);
        let h = harness(fetcher, "/guide/index.html", 1, 10);

        let extracted = h.crawler.run(&h.state).await.unwrap();

        assert_eq!(extracted, vec![format!("{}/guide/child.html", ROOT)]);
        assert_eq!(h.sink.pending().await, 1);
    }

    #[tokio::test]
    async fn test_landing_page_xml_links_are_followed() {
        let xml = urlencoding::encode(r#"<list-card-item href="/guide/card.html"/>"#).into_owned();
        let fetcher = FakeFetcher::with_pages(&[
            ("/guide/index.html", landing(&format!(r#"<input id="landing-page-xml" value="{}">"#, xml))),
            ("/guide/card.html", page("<p>Card</p>")),
        ]);
        let h = harness(fetcher, "/guide/index.html", 1, 10);

        let extracted = h.crawler.run(&h.state).await.unwrap();
        assert_eq!(extracted, vec![format!("{}/guide/card.html", ROOT)]);
    }

    #[tokio::test]
    async fn test_pgp_page_is_skipped_even_when_type_is_supported() {
        let fetcher = FakeFetcher::with_pages(&[
            (
                "/guide/keys.html",
                page(r#"<p>-----BEGIN PGP PUBLIC KEY BLOCK-----</p><a href="/guide/other.html">x</a>"#),
            ),
            ("/guide/other.html", page("<p>Other</p>")),
        ]);
        let h = harness(fetcher, "/guide/keys.html", 1, 10);

        let extracted = h.crawler.run(&h.state).await.unwrap();

        assert!(extracted.is_empty());
        assert_eq!(h.sink.pending().await, 0);
        // a skipped page doesn't lead anywhere
        assert_eq!(h.fetcher.fetched().len(), 1);
        assert_eq!(h.state.page_count(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_type_gets_no_record_but_is_traversed() {
        let fetcher = FakeFetcher::with_pages(&[
            ("/index.html", page(r#"<p>Root</p><a href="/guide/a.html">A</a>"#)),
            ("/guide/a.html", page("<p>A</p>")),
        ]);
        let h = harness(fetcher, "/index.html", 1, 10);

        let extracted = h.crawler.run(&h.state).await.unwrap();
        assert_eq!(extracted, vec![format!("{}/guide/a.html", ROOT)]);
    }

    #[tokio::test]
    async fn test_failures_stay_in_their_branch() {
        let fetcher = FakeFetcher::with_pages(&[
            (
                "/guide/e.html",
                page(r#"<a href="/guide/missing.html">404</a><a href="https://[bad">bad</a><a href="/guide/ok.html">ok</a>"#),
            ),
            ("/guide/ok.html", page("<p>OK</p>")),
        ]);
        let h = harness(fetcher, "/guide/e.html", 1, 10);

        let extracted = h.crawler.run(&h.state).await.unwrap();

        assert_eq!(
            sorted(extracted),
            vec![format!("{}/guide/e.html", ROOT), format!("{}/guide/ok.html", ROOT)]
        );
    }

    #[tokio::test]
    async fn test_exclusions_and_foreign_hosts_are_not_fetched() {
        let fetcher = FakeFetcher::with_pages(&[(
            "/guide/e.html",
            page(
                r#"<a href="/guide/doc.pdf">pdf</a><a href="/feed.rss">rss</a>
                   <a href="/guide/e.html#top">anchor</a><a href="https://elsewhere.com/x">x</a>
                   <a href="mailto:docs@example.com">mail</a>"#,
            ),
        )]);
        let h = harness(fetcher, "/guide/e.html", 1, 10);

        h.crawler.run(&h.state).await.unwrap();

        assert_eq!(h.fetcher.fetched(), vec![format!("{}/guide/e.html", ROOT)]);
        assert_eq!(h.state.page_count(), 1);
    }

    #[tokio::test]
    async fn test_batches_bound_sibling_concurrency() {
        let links: String = (0..7)
            .map(|i| format!(r#"<a href="/guide/{}.html">{}</a>"#, i, i))
            .collect();
        let names: Vec<String> = (0..7).map(|i| format!("/guide/{}.html", i)).collect();
        let mut pages = vec![("/guide/e.html", page(&links))];
        for name in &names {
            pages.push((name.as_str(), page("<p>child</p>")));
        }
        let mut fetcher = FakeFetcher::with_pages(&pages);
        fetcher.delay = Some(Duration::from_millis(20));
        let h = harness(fetcher, "/guide/e.html", 1, 3);

        let extracted = h.crawler.run(&h.state).await.unwrap();

        assert_eq!(extracted.len(), 8);
        assert!(h.fetcher.max_in_flight.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn test_overall_timeout_fails_the_crawl() {
        let mut fetcher = FakeFetcher::with_pages(&[("/guide/e.html", page("<p>E</p>"))]);
        fetcher.delay = Some(Duration::from_secs(5));
        let mut h = harness(fetcher, "/guide/e.html", 1, 10);
        h.crawler.config.timeout = Duration::from_millis(50);

        let result = h.crawler.run(&h.state).await;
        assert!(matches!(result, Err(CrawlError::Timeout(_))));
    }

    // E links to a, b and c; with a batch size of 1 the claim order is fixed
    fn four_guide_pages() -> FakeFetcher {
        FakeFetcher::with_pages(&[
            (
                "/guide/e.html",
                page(r#"<p>E</p><a href="/guide/a.html">a</a><a href="/guide/b.html">b</a><a href="/guide/c.html">c</a>"#),
            ),
            ("/guide/a.html", page("<p>A</p>")),
            ("/guide/b.html", page("<p>B</p>")),
            ("/guide/c.html", page("<p>C</p>")),
        ])
    }

    #[tokio::test]
    async fn test_periodic_flush_writes_before_the_end() {
        let h = saving_harness(four_guide_pages(), "/guide/e.html", 1, 1, 2);

        let extracted = h.crawler.run(&h.state).await.unwrap();
        assert_eq!(extracted.len(), 4);

        // page 2 (a) flushed E, page 4 (c) flushed a and b; c waits for the
        // final flush
        assert_eq!(h.sink.persisted(), 3);
        assert_eq!(h.sink.pending().await, 1);

        let written = std::fs::read_to_string(h.sink.path()).unwrap();
        assert!(written.contains(&format!("{}/guide/e.html", ROOT)));
        assert!(!written.contains(&format!("{}/guide/c.html", ROOT)));
    }

    #[tokio::test]
    async fn test_failed_periodic_flush_does_not_stop_the_crawl() {
        let h = saving_harness(four_guide_pages(), "/guide/e.html", 1, 1, 2);
        // the output file is a directory, so every flush fails to open it
        std::fs::create_dir_all(h.sink.path()).unwrap();

        let extracted = h.crawler.run(&h.state).await.unwrap();

        assert_eq!(
            sorted(extracted),
            vec![
                format!("{}/guide/a.html", ROOT),
                format!("{}/guide/b.html", ROOT),
                format!("{}/guide/c.html", ROOT),
                format!("{}/guide/e.html", ROOT),
            ]
        );
        assert_eq!(h.fetcher.fetched().len(), 4);
        assert_eq!(h.sink.persisted(), 0);
    }

    #[test]
    fn test_fan_out_batches() {
        let fan_out = FanOut::new(3).unwrap();
        let items: Vec<u32> = (0..7).collect();
        let sizes: Vec<usize> = fan_out.batches(&items).map(|b| b.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
        assert!(FanOut::new(0).is_err());
    }
}
