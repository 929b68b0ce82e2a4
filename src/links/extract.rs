// src/links/extract.rs
// =============================================================================
// Finds outbound links in the raw source of a page.
//
// Two sources of links:
// 1. Every <a href="..."> in the page, found with a regex over the source
// 2. Landing pages carry their card grid as percent-encoded XML inside
//    <input id="landing-page-xml" value="...">. Every <list-card-item href>
//    in that payload is a link too. The payload has to be well-formed XML;
//    a broken one gives no links at all.
//
// We scan the source string instead of the parsed tree because the second
// kind of link lives inside an attribute value, not in the DOM.
//
// Nothing in here can fail from the caller's point of view: a payload that
// won't decode contributes zero links and the anchor links still come back.
//
// Rust concepts:
// - once_cell::sync::Lazy: compile a regex once, reuse it everywhere
// - Iterators: captures_iter / filter_map to walk matches
// - ? with #[from]: decode and XML errors convert into PayloadError
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

// href must follow whitespace, so data-href and friends don't match
static ANCHOR_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\s(?:[^>]*?\s)?href\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("anchor regex is valid")
});

static INPUT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<input\b[^>]*>").expect("input regex is valid"));

static ID_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bid\s*=\s*["']landing-page-xml["']"#).expect("id regex is valid")
});

static VALUE_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)\bvalue\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("value regex is valid")
});

const LIST_CARD_ITEM: &str = "list-card-item";

#[derive(Debug, Error)]
enum PayloadError {
    #[error("percent-decoding failed: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("payload is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Extracts every raw link from a page's source, in document order.
///
/// Anchor links come first, then links from each landing-page payload.
/// Duplicates are kept; the visited set deduplicates later.
pub fn extract_links(html: &str) -> Vec<String> {
    let mut links: Vec<String> = ANCHOR_HREF
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .filter(|href| !href.trim().is_empty())
        .collect();

    for payload in landing_page_payloads(html) {
        match landing_page_links(payload) {
            Ok(found) => links.extend(found),
            Err(e) => debug!(error = %e, "ignoring landing-page payload"),
        }
    }

    links
}

// Raw (still percent-encoded) value attributes of landing-page inputs
fn landing_page_payloads(html: &str) -> impl Iterator<Item = &str> {
    INPUT_TAG
        .find_iter(html)
        .map(|tag| tag.as_str())
        .filter(|tag| ID_ATTR.is_match(tag))
        .filter_map(|tag| {
            VALUE_ATTR
                .captures(tag)
                .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
                .map(|m| m.as_str())
        })
}

fn landing_page_links(encoded: &str) -> Result<Vec<String>, PayloadError> {
    let decoded = urlencoding::decode(encoded)?;

    // Strict parse: any error throws away the whole payload, so we never
    // return links from half of a broken document
    let document = roxmltree::Document::parse(&decoded)?;

    Ok(document
        .descendants()
        .filter(|node| node.has_tag_name(LIST_CARD_ITEM))
        .filter_map(|node| node.attribute("href"))
        .map(str::to_string)
        .collect())
}
