// src/extract/content.rs
// =============================================================================
// Pulls structured content out of a parsed documentation page.
//
// What we extract (each list keeps document order):
// - text:   <p> paragraphs inside the content container, newline-joined.
//           Without a container (or when it isn't on the page) we use every
//           text node of <body> instead.
// - tables: one row object per data row, keyed by the table's <th> headers
// - code:   every <pre>/<code> block with its class as a language hint
// - images: every <img> with its src and alt
//
// Text is reduced to printable ASCII (0x20..=0x7E). That drops every
// non-Latin character and symbol; it's lossy on purpose.
//
// Extraction is a pure function of the document: no I/O, no errors. A page
// with no tables simply has an empty table list.
//
// Rust concepts:
// - scraper's ElementRef: select() children, text() iterates text nodes
// - Iterator::zip: pairs headers with cells and stops at the shorter one
// =============================================================================

use crate::error::ConfigError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// One data row of a table, keyed by column header in column order.
pub type TableRow = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub code: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// Everything extracted from one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    pub title: String,
    pub text: String,
    pub tables: Vec<TableRow>,
    pub code: Vec<CodeBlock>,
    pub images: Vec<ImageRef>,
}

// Selectors are constants, so parsing them can't fail at runtime
static TITLE: Lazy<Selector> = Lazy::new(|| sel("title"));
static BODY: Lazy<Selector> = Lazy::new(|| sel("body"));
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| sel("p"));
static TABLE: Lazy<Selector> = Lazy::new(|| sel("table"));
static TABLE_HEADER: Lazy<Selector> = Lazy::new(|| sel("th"));
static TABLE_ROW: Lazy<Selector> = Lazy::new(|| sel("tr"));
static TABLE_CELL: Lazy<Selector> = Lazy::new(|| sel("td"));
static CODE: Lazy<Selector> = Lazy::new(|| sel("pre, code"));
static INNER_CODE: Lazy<Selector> = Lazy::new(|| sel("code"));
static IMAGE: Lazy<Selector> = Lazy::new(|| sel("img"));

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("built-in selector is valid")
}

/// Default content container on documentation pages.
pub const DEFAULT_CONTAINER: &str = "#main-col-body";

/// Extracts text, tables, code and images from documents.
///
/// The content container is configuration: some sites wrap the article in a
/// narrower element, others only have the body.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    container: Option<Selector>,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self {
            container: Some(sel(DEFAULT_CONTAINER)),
        }
    }
}

impl ContentExtractor {
    /// Extractor that takes prose from the element matching `css`.
    pub fn with_container(css: &str) -> Result<Self, ConfigError> {
        let container =
            Selector::parse(css).map_err(|_| ConfigError::InvalidSelector(css.to_string()))?;
        Ok(Self {
            container: Some(container),
        })
    }

    /// Extractor that always takes prose from the whole body.
    pub fn full_body() -> Self {
        Self { container: None }
    }

    /// Parses raw HTML and extracts from it.
    pub fn extract_html(&self, html: &str) -> ExtractedContent {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    pub fn extract(&self, document: &Html) -> ExtractedContent {
        ExtractedContent {
            title: extract_title(document),
            text: self.extract_text(document),
            tables: extract_tables(document),
            code: extract_code(document),
            images: extract_images(document),
        }
    }

    fn extract_text(&self, document: &Html) -> String {
        // First matching container wins; a page without one falls back to
        // the body, same as a full-body extractor
        let container = self
            .container
            .as_ref()
            .and_then(|selector| document.select(selector).next());

        let lines: Vec<String> = match container {
            // One line per paragraph, stripped before joining so the
            // paragraph breaks survive
            Some(container) => container
                .select(&PARAGRAPH)
                .map(|p| to_printable_ascii(&p.text().collect::<String>()))
                .collect(),
            None => {
                // html5ever always adds a <body>, root_element is just a backstop
                let root = document
                    .select(&BODY)
                    .next()
                    .unwrap_or_else(|| document.root_element());
                root.text().map(to_printable_ascii).collect()
            }
        };

        // Whitespace-only lines (indentation between tags) are noise
        lines
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Drops every character outside printable ASCII (0x20..=0x7E).
pub fn to_printable_ascii(text: &str) -> String {
    text.chars().filter(|c| (' '..='~').contains(c)).collect()
}

fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE)
        .next()
        .map(|title| collapse_whitespace(&title.text().collect::<String>()))
        .unwrap_or_default()
}

fn extract_tables(document: &Html) -> Vec<TableRow> {
    let mut rows = Vec::new();

    for table in document.select(&TABLE) {
        // Headers in document order; they become the keys of every row
        let headers: Vec<String> = table.select(&TABLE_HEADER).map(cell_text).collect();

        // the first row holds the headers
        for row in table.select(&TABLE_ROW).skip(1) {
            // zip stops at the shorter side: extra cells are dropped,
            // missing cells leave their header out of the row
            let record: TableRow = headers
                .iter()
                .cloned()
                .zip(row.select(&TABLE_CELL).map(cell_text))
                .collect();

            // a row with no <td> at all (e.g. a second header row)
            if !record.is_empty() {
                rows.push(record);
            }
        }
    }

    rows
}

fn extract_code(document: &Html) -> Vec<CodeBlock> {
    document
        .select(&CODE)
        .filter(|element| !inside_pre(element))
        .map(|element| {
            // <pre class="lang"> or <pre><code class="lang">
            let language = element
                .value()
                .attr("class")
                .or_else(|| {
                    element
                        .select(&INNER_CODE)
                        .next()
                        .and_then(|code| code.value().attr("class"))
                })
                .unwrap_or_default()
                .to_string();

            // Keep indentation, lose the blank lines around the block
            CodeBlock {
                code: element.text().collect::<String>().trim_matches('\n').to_string(),
                language,
            }
        })
        .collect()
}

// <code> nested in <pre> is already captured through its <pre>
fn inside_pre(element: &ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "pre")
}

fn extract_images(document: &Html) -> Vec<ImageRef> {
    document
        .select(&IMAGE)
        .map(|img| ImageRef {
            src: img.value().attr("src").unwrap_or_default().to_string(),
            alt: img.value().attr("alt").unwrap_or_default().to_string(),
        })
        .collect()
}

fn cell_text(cell: ElementRef) -> String {
    collapse_whitespace(&cell.text().collect::<String>())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Lazy<Selector> statics?
//    - Selector::parse() compiles the CSS selector, which isn't free
//    - Lazy runs the closure once, on first use, and shares the result
//    - The selectors are fixed strings, so the expect() can never fire
//
// 2. What is IndexMap?
//    - A HashMap that remembers insertion order
//    - Table rows serialize with their columns in the table's order
//
// 3. Why does extract_html() exist next to extract()?
//    - scraper's Html is not Send, so it can't be held across an .await
//    - extract_html() parses and extracts in one synchronous call, which
//      keeps the crawl futures Send
// -----------------------------------------------------------------------------
