// src/filter/content.rs
// =============================================================================
// Last check on a record right before it is written out.
//
// The page filter already ran on the raw document; this one looks at what
// was actually extracted (the record's URL and body text) and drops records
// that still smell like PDFs, browser-extension pages, key blocks, or text
// with any character above 127.
//
// The non-ASCII rule here is separate from the ASCII stripping done during
// extraction: that one rewrites a field, this one throws the whole record
// away, and it only looks at the body.
// =============================================================================

use super::page::PGP_BLOCK_BEGIN;
use crate::record::CrawlRecord;
use std::fmt;

const EXTENSION_SCHEMES: &[&str] = &["chrome-extension://", "moz-extension://"];
const EMBEDDED_PDF_MARKERS: &[&str] = &["application/pdf", "application/x-google-chrome-pdf"];
const PDF_MAGIC: &str = "%PDF-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Pdf,
    BrowserExtension,
    EmbeddedPdf,
    PgpKeyBlock,
    NonAscii,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DropReason::Pdf => "PDF document",
            DropReason::BrowserExtension => "browser extension page",
            DropReason::EmbeddedPdf => "embedded PDF marker",
            DropReason::PgpKeyBlock => "PGP key block",
            DropReason::NonAscii => "non-ASCII text",
        };
        f.write_str(reason)
    }
}

/// Returns why a record must not be persisted, or None if it may be.
pub fn check_record(record: &CrawlRecord) -> Option<DropReason> {
    let url = record.url().to_ascii_lowercase();
    let body = record.text_content();

    if url.ends_with(".pdf") || body.trim_start().starts_with(PDF_MAGIC) {
        return Some(DropReason::Pdf);
    }
    if EXTENSION_SCHEMES
        .iter()
        .any(|scheme| url.starts_with(scheme) || body.contains(scheme))
    {
        return Some(DropReason::BrowserExtension);
    }
    if EMBEDDED_PDF_MARKERS.iter().any(|marker| body.contains(marker)) {
        return Some(DropReason::EmbeddedPdf);
    }
    if body.contains(PGP_BLOCK_BEGIN) {
        return Some(DropReason::PgpKeyBlock);
    }
    if has_non_ascii(body) {
        return Some(DropReason::NonAscii);
    }
    None
}

/// True if any character's code is above 127.
pub fn has_non_ascii(text: &str) -> bool {
    !text.is_ascii()
}
