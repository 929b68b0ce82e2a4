// src/extract/mod.rs
// =============================================================================
// Content extraction from parsed pages (text, tables, code, images).
// =============================================================================

mod content;

pub use content::{ContentExtractor, ExtractedContent, DEFAULT_CONTAINER};
