// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, filtered by RUST_LOG)
// 3. Dispatch to the appropriate subcommand handler
// 4. Flush whatever was extracted and print a summary
// 5. Exit with proper code (0 = success, 2 = error or timeout)
//
// Rust concepts used:
// - async/await: the crawl fetches many pages concurrently
// - Arc: the sink and the fetch/classify capabilities are shared
// - anyhow::Result: application-level errors with context
// =============================================================================

mod classify;
mod cli;
mod config;
mod crawl;
mod error;
mod extract;
mod fetch;
mod filter;
mod links;
mod record;
mod sink;

use anyhow::{Context, Result};
use clap::Parser;
use classify::{Classifier, UrlPatternClassifier};
use cli::{Cli, Commands, CrawlArgs};
use crawl::{CrawlState, Crawler};
use fetch::{Fetcher, HttpFetcher};
use serde::Serialize;
use sink::ContentSink;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "debug"
    } else {
        "info,docs_harvester=debug"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Crawl(args) => handle_crawl(&args).await,
        Commands::Classify { url } => {
            let page_type = UrlPatternClassifier::new().classify_url(&url);
            println!("{}\t{}", url, page_type);
            Ok(0)
        }
    }
}

/// What the user sees at the end of a crawl.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CrawlSummary {
    entry_url: String,
    output_file: String,
    pages_visited: usize,
    records_extracted: usize,
    records_persisted: usize,
    records_dropped: usize,
    elapsed_secs: f64,
    timed_out: bool,
}

async fn handle_crawl(args: &CrawlArgs) -> Result<i32> {
    let config = args.to_config().context("Invalid crawl configuration")?;
    let started = Instant::now();

    let fetcher: Arc<dyn Fetcher> = Arc::new(
        HttpFetcher::new(config.request_timeout).context("Failed to create HTTP client")?,
    );
    let classifier: Arc<dyn Classifier> = Arc::new(UrlPatternClassifier::new());
    let sink = Arc::new(ContentSink::new(config.output_path(), config.wrap_width));
    let crawler = Crawler::new(config, fetcher, classifier, Arc::clone(&sink))
        .context("Invalid crawl configuration")?;

    let state = CrawlState::new();
    let outcome = crawler.run(&state).await;

    // whatever made it into the sink is written, timeout or not
    info!(pending = sink.pending().await, "flushing remaining records");
    if let Err(e) = sink.flush().await {
        error!(error = %e, "final flush failed");
    }

    let (records_extracted, timed_out) = match &outcome {
        Ok(extracted) => (extracted.len(), false),
        Err(e) => {
            warn!(error = %e, "crawl did not finish");
            (sink.persisted() + sink.dropped(), true)
        }
    };

    let summary = CrawlSummary {
        entry_url: crawler.config().entry_url.clone(),
        output_file: sink.path().display().to_string(),
        pages_visited: state.page_count(),
        records_extracted,
        records_persisted: sink.persisted(),
        records_dropped: sink.dropped(),
        elapsed_secs: started.elapsed().as_secs_f64(),
        timed_out,
    };
    info!(pages_visited = summary.pages_visited, "crawl finished");
    print_summary(&summary, args.json)?;

    outcome.map(|_| 0).context("Crawl failed")
}

fn print_summary(summary: &CrawlSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!();
    println!("📊 Summary:");
    println!("   🌐 Entry:     {}", summary.entry_url);
    println!("   📄 Visited:   {}", summary.pages_visited);
    println!("   🧩 Extracted: {}", summary.records_extracted);
    println!("   💾 Persisted: {}", summary.records_persisted);
    println!("   🚫 Dropped:   {}", summary.records_dropped);
    println!("   📁 Output:    {}", summary.output_file);
    println!("   ⏱️  Elapsed:   {:.1}s", summary.elapsed_secs);
    if summary.timed_out {
        println!("   ⚠️  Crawl timed out before finishing");
    }
    Ok(())
}
