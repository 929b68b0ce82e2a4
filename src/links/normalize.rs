// src/links/normalize.rs
// =============================================================================
// Turns raw link strings into absolute URLs and answers the cheap
// "should we even try this URL?" questions before any network work.
//
// Normalization is deliberately shallow:
// 1. Strip one trailing '.' (links copied out of prose often carry one)
// 2. Leave http/https URLs alone, otherwise prepend the site root
//
// No percent-decoding, query canonicalization or case-folding happens here,
// so two URLs that differ only in those respects are different pages.
//
// Rust concepts:
// - &str slicing with strip_suffix / strip_prefix
// - Result for the one operation that can fail (host parsing)
// =============================================================================

use crate::error::{CrawlError, CrawlResult};
use url::Url;

// Suffixes that never point at crawlable HTML
const EXCLUDED_SUFFIXES: &[&str] = &[".pdf", ".rss"];

// Schemes that can't be fetched (same list the link checker skipped)
const NON_NAVIGABLE_PREFIXES: &[&str] = &["mailto:", "tel:", "javascript:", "data:"];

/// Resolves a raw link against the site root.
///
/// Examples (site root `https://docs.example.com`):
///   "/ec2/index.html."           -> "https://docs.example.com/ec2/index.html"
///   "https://other.com/page"     -> "https://other.com/page"
///   "guide/intro.html"           -> "https://docs.example.com/guide/intro.html"
pub fn normalize_url(raw: &str, site_root: &str) -> String {
    let link = raw.trim();
    let link = link.strip_suffix('.').unwrap_or(link);

    if has_http_scheme(link) {
        return link.to_string();
    }

    let root = site_root.trim_end_matches('/');
    if link.starts_with('/') {
        format!("{}{}", root, link)
    } else {
        format!("{}/{}", root, link)
    }
}

fn has_http_scheme(link: &str) -> bool {
    let lower = link.get(..8).unwrap_or(link).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// True for links that point at feeds, PDFs or in-page anchors.
pub fn is_excluded(url: &str) -> bool {
    if url.contains('#') {
        return true;
    }
    let lower = url.to_ascii_lowercase();
    EXCLUDED_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// True for mailto:, tel:, javascript: and data: links.
pub fn is_non_navigable(raw: &str) -> bool {
    let lower = raw.trim().to_ascii_lowercase();
    NON_NAVIGABLE_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

/// Checks that an absolute URL lives on the allowed domain.
///
/// Returns `CrawlError::InvalidUrl` when the URL can't be parsed at all,
/// which the orchestrator treats as a per-URL failure.
pub fn is_allowed_host(url: &str, allowed_domain: &str) -> CrawlResult<bool> {
    let parsed = Url::parse(url).map_err(|e| CrawlError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.host_str() {
        Some(host) => Ok(host.eq_ignore_ascii_case(allowed_domain)),
        None => Err(CrawlError::InvalidUrl {
            url: url.to_string(),
            reason: "URL has no host".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "https://docs.example.com";

    #[test]
    fn test_strips_single_trailing_dot() {
        assert_eq!(
            normalize_url("/ec2/index.html.", ROOT),
            "https://docs.example.com/ec2/index.html"
        );
        // only one dot goes
        assert_eq!(
            normalize_url("https://docs.example.com/a..", ROOT),
            "https://docs.example.com/a."
        );
    }

    #[test]
    fn test_absolute_links_are_left_alone() {
        assert_eq!(
            normalize_url("https://other.com/Page?b=1&a=2", ROOT),
            "https://other.com/Page?b=1&a=2"
        );
        assert_eq!(normalize_url("http://x.org/", ROOT), "http://x.org/");
    }

    #[test]
    fn test_relative_links_get_the_root() {
        assert_eq!(
            normalize_url("/guide/intro.html", ROOT),
            "https://docs.example.com/guide/intro.html"
        );
        assert_eq!(
            normalize_url("guide/intro.html", "https://docs.example.com/"),
            "https://docs.example.com/guide/intro.html"
        );
    }

    #[test]
    fn test_no_percent_decoding_or_case_folding() {
        let url = normalize_url("/Guide/My%20Page.html", ROOT);
        assert_eq!(url, "https://docs.example.com/Guide/My%20Page.html");
        assert_ne!(url, normalize_url("/guide/my page.html", ROOT));
    }

    #[test]
    fn test_exclusions() {
        assert!(is_excluded("https://docs.example.com/guide.pdf"));
        assert!(is_excluded("https://docs.example.com/feed.RSS"));
        assert!(is_excluded("https://docs.example.com/page.html#section"));
        assert!(!is_excluded("https://docs.example.com/page.html"));
    }

    #[test]
    fn test_non_navigable() {
        assert!(is_non_navigable("mailto:test@example.com"));
        assert!(is_non_navigable(" javascript:void(0)"));
        assert!(!is_non_navigable("/docs"));
    }

    #[test]
    fn test_allowed_host() {
        assert!(is_allowed_host("https://docs.example.com/a", "docs.example.com").unwrap());
        assert!(!is_allowed_host("https://evil.com/a", "docs.example.com").unwrap());
        assert!(is_allowed_host("not a url", "docs.example.com").is_err());
    }
}
