// src/sink/mod.rs
// =============================================================================
// Buffers extracted records and appends them to the output file.
//
// How it works:
// 1. Crawl branches push() records into an in-memory buffer
// 2. flush() (every N pages, and once at shutdown) takes the whole buffer,
//    drops records that fail the content filter, renders the rest as JSON
//    and appends them to the output file
//
// The buffer lock is held for the whole take-filter-write sequence, so two
// overlapping flushes can't lose or duplicate records, and records reach the
// file in the order they were pushed.
//
// The file is only ever appended to. Running the crawl twice against the same
// output file leaves both runs' records in it.
//
// Rust concepts:
// - tokio::sync::Mutex: a lock that can be held across .await
// - std::mem::take: move the Vec out and leave an empty one behind
// =============================================================================

mod format;

use crate::error::PersistenceError;
use crate::filter::check_record;
use crate::record::CrawlRecord;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Outcome of one flush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub written: usize,
    pub dropped: usize,
}

#[derive(Debug)]
pub struct ContentSink {
    buffer: Mutex<Vec<CrawlRecord>>,
    path: PathBuf,
    wrap_width: usize,
    persisted: AtomicUsize,  // records that made it into the file
    dropped: AtomicUsize,    // records the content filter (or rendering) rejected
}

impl ContentSink {
    pub fn new(path: impl Into<PathBuf>, wrap_width: usize) -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
            path: path.into(),
            wrap_width,
            persisted: AtomicUsize::new(0),
            dropped: AtomicUsize::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Adds a record to the buffer.
    pub async fn push(&self, record: CrawlRecord) {
        self.buffer.lock().await.push(record);
    }

    /// Records waiting for the next flush.
    pub async fn pending(&self) -> usize {
        self.buffer.lock().await.len()
    }

    /// Total records written so far.
    pub fn persisted(&self) -> usize {
        self.persisted.load(Ordering::SeqCst)
    }

    /// Total records rejected by the content filter so far.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }

    /// Filters and appends every buffered record, then clears the buffer.
    ///
    /// On a write error the records of this flush are lost; the caller
    /// logs it and the crawl goes on.
    pub async fn flush(&self) -> Result<FlushReport, PersistenceError> {
        // Hold the lock until the write is done; a second flush waits here
        // instead of interleaving with this one
        let mut buffer = self.buffer.lock().await;
        if buffer.is_empty() {
            return Ok(FlushReport::default());
        }

        // Move the records out; new pushes wait for the lock anyway
        let records = std::mem::take(&mut *buffer);
        let (output, report) = self.render_batch(&records);

        // Dropped records are final whether or not the write below succeeds
        self.dropped.fetch_add(report.dropped, Ordering::SeqCst);
        if report.written > 0 {
            self.append(&output).await?;
            self.persisted.fetch_add(report.written, Ordering::SeqCst);
        }

        info!(
            path = %self.path.display(),
            written = report.written,
            dropped = report.dropped,
            "flushed records"
        );
        Ok(report)
    }

    // Filters and renders one batch. A record that fails the filter or can't
    // be rendered is counted as dropped; the rest of the batch is unaffected.
    fn render_batch(&self, records: &[CrawlRecord]) -> (String, FlushReport) {
        let mut report = FlushReport::default();
        let mut output = String::new();

        for record in records {
            // Second line of defence: the page filter saw the raw HTML,
            // this one sees the extracted text
            if let Some(reason) = check_record(record) {
                debug!(url = %record.url(), %reason, "dropping record");
                report.dropped += 1;
                continue;
            }

            match format::render_record(record, self.wrap_width) {
                Ok(rendered) => {
                    output.push_str(&rendered);
                    report.written += 1;
                }
                Err(source) => {
                    let e = PersistenceError::Serialize {
                        url: record.url().to_string(),
                        source,
                    };
                    warn!(error = %e, "dropping record that could not be rendered");
                    report.dropped += 1;
                }
            }
        }

        (output, report)
    }

    async fn append(&self, text: &str) -> Result<(), PersistenceError> {
        let io_error = |source: std::io::Error| PersistenceError::Io {
            path: self.path.display().to_string(),
            source,
        };

        // First flush of a run may need to create the output directory
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(io_error)?;
        }

        // append(true): earlier flushes (and earlier runs) are never rewritten
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(io_error)?;
        file.write_all(text.as_bytes()).await.map_err(io_error)?;
        file.flush().await.map_err(io_error)?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why tokio::sync::Mutex and not std::sync::Mutex?
//    - flush() keeps the lock while it awaits the file write
//    - A std Mutex guard can't be held across .await in a Send future
//    - The tokio Mutex is built for exactly that
//
// 2. What does std::mem::take do here?
//    - It swaps the buffer with an empty Vec and hands us the old one
//    - The buffer is cleared and we own the records, without cloning them
//
// 3. Why are the counters atomics?
//    - persisted()/dropped() are read without taking the buffer lock
//    - AtomicUsize lets many tasks update and read them safely
// -----------------------------------------------------------------------------
