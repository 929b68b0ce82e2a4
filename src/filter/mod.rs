// src/filter/mod.rs
// =============================================================================
// Filters that keep unwanted pages out of the results.
//
// Submodules:
// - page: runs on a fetched document and decides Skip / Navigate / Extract
// - content: runs on a finished record right before it is persisted
//
// The two stages overlap on purpose (both look for PDFs and PGP keys), but
// they see different things: the raw page vs. the extracted text.
// =============================================================================

mod content;
mod page;

pub use content::check_record;
pub use page::{evaluate, PageOutcome};
