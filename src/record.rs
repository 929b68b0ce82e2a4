// src/record.rs
// =============================================================================
// The persisted unit of a crawl: one CrawlRecord per page that passed every
// filter and has a supported page type.
//
// Records are immutable once built. The structured parts (tables, code,
// images) are stored as their JSON text, which is exactly what ends up in
// the output file.
// =============================================================================

use crate::classify::PageType;
use crate::extract::ExtractedContent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRecord {
    url: String,
    page_type: PageType,
    title: String,
    text_content: String,
    table_content: String,
    code_content: String,
    image_content: String,
}

impl CrawlRecord {
    /// Builds a record from a page's extracted content.
    pub fn new(url: impl Into<String>, page_type: PageType, content: &ExtractedContent) -> Self {
        Self {
            url: url.into(),
            page_type,
            title: content.title.clone(),
            text_content: content.text.clone(),
            table_content: to_json_text(&content.tables),
            code_content: to_json_text(&content.code),
            image_content: to_json_text(&content.images),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn page_type(&self) -> &PageType {
        &self.page_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text_content(&self) -> &str {
        &self.text_content
    }

    pub fn table_content(&self) -> &str {
        &self.table_content
    }

    pub fn code_content(&self) -> &str {
        &self.code_content
    }

    pub fn image_content(&self) -> &str {
        &self.image_content
    }
}

// Vec<T> of plain strings/maps always serializes; fall back to an empty array
fn to_json_text<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
}
