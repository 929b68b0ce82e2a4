// src/filter/page.rs
// =============================================================================
// Decides what to do with a fetched page before any content is extracted.
//
// The predicates run in a fixed order and the first match wins:
//
//   1. Missing body / PDF viewer title  -> Skip
//   2. Embedded PDF viewer              -> Skip
//   3. PGP public key block             -> Skip
//   4. Decision guide / landing page /
//      glossary meta tag                -> Navigate (links only, no record)
//   5. Anything else                    -> Extract
//
// Each predicate is a plain function so it can be tested on its own.
//
// Rust concepts:
// - Enums with data: the outcome carries the reason it was chosen
// - Early return from a chain of checks
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::fmt;

pub const PGP_BLOCK_BEGIN: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----";

// Titles browsers give to pages that are really rendered PDFs
const PDF_TITLE_SENTINELS: &[&str] = &["pdf", "pdf.js viewer"];

static BODY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<body[\s>/]").expect("body regex is valid"));

static BODY: Lazy<Selector> = Lazy::new(|| sel("body"));
static TITLE: Lazy<Selector> = Lazy::new(|| sel("title"));
static EMBEDDED_PDF: Lazy<Selector> =
    Lazy::new(|| sel(r#"embed[type*="pdf"], object[type*="pdf"], iframe[type*="pdf"]"#));
static META: Lazy<Selector> = Lazy::new(|| sel("meta[name][content]"));

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("built-in selector is valid")
}

/// Why a page was skipped outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingBody,
    PdfTitle,
    EmbeddedPdf,
    PgpKeyBlock,
}

/// Which kind of navigation hub a page is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    DecisionGuide,
    LandingPage,
    Glossary,
}

/// Outcome of running the page filter chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Don't extract and don't follow links.
    Skip(SkipReason),
    /// Don't extract, but keep crawling outbound links.
    Navigate(NavigationKind),
    /// Candidate for extraction (still subject to the page type allow-list).
    Extract,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::MissingBody => "page has no body",
            SkipReason::PdfTitle => "page is a rendered PDF",
            SkipReason::EmbeddedPdf => "page embeds a PDF viewer",
            SkipReason::PgpKeyBlock => "page contains a PGP key block",
        };
        f.write_str(reason)
    }
}

impl fmt::Display for NavigationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            NavigationKind::DecisionGuide => "decision guide",
            NavigationKind::LandingPage => "landing page",
            NavigationKind::Glossary => "glossary",
        };
        f.write_str(kind)
    }
}

// (meta name, meta content) pairs that mark navigation-only pages
const NAVIGATION_META: &[(&str, &str, NavigationKind)] = &[
    ("guide-name", "decision guide", NavigationKind::DecisionGuide),
    ("page-type", "decision-guide", NavigationKind::DecisionGuide),
    ("page-type", "landing-page", NavigationKind::LandingPage),
    ("page-type", "glossary", NavigationKind::Glossary),
];

/// Runs the whole chain over raw HTML.
pub fn evaluate(raw_html: &str) -> PageOutcome {
    let document = Html::parse_document(raw_html);
    evaluate_document(raw_html, &document)
}

/// Runs the whole chain over an already parsed document.
///
/// The raw source is needed because the HTML parser always synthesizes a
/// <body>, so a missing body can only be seen in the source.
pub fn evaluate_document(raw_html: &str, document: &Html) -> PageOutcome {
    if is_missing_body(raw_html) {
        return PageOutcome::Skip(SkipReason::MissingBody);
    }
    if has_pdf_title(document) {
        return PageOutcome::Skip(SkipReason::PdfTitle);
    }
    if has_embedded_pdf(document) {
        return PageOutcome::Skip(SkipReason::EmbeddedPdf);
    }
    if has_pgp_key_block(document) {
        return PageOutcome::Skip(SkipReason::PgpKeyBlock);
    }
    if let Some(kind) = navigation_kind(document) {
        return PageOutcome::Navigate(kind);
    }
    PageOutcome::Extract
}

pub fn is_missing_body(raw_html: &str) -> bool {
    !BODY_TAG.is_match(raw_html)
}

pub fn has_pdf_title(document: &Html) -> bool {
    document
        .select(&TITLE)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_lowercase())
        .is_some_and(|title| PDF_TITLE_SENTINELS.contains(&title.as_str()))
}

pub fn has_embedded_pdf(document: &Html) -> bool {
    document.select(&EMBEDDED_PDF).next().is_some()
}

pub fn has_pgp_key_block(document: &Html) -> bool {
    document
        .select(&BODY)
        .next()
        .map(|body| body.text().collect::<String>())
        .is_some_and(|text| text.contains(PGP_BLOCK_BEGIN))
}

pub fn navigation_kind(document: &Html) -> Option<NavigationKind> {
    document.select(&META).find_map(|meta| {
        let name = meta.value().attr("name")?.trim();
        let content = meta.value().attr("content")?.trim();
        NAVIGATION_META
            .iter()
            .find(|(meta_name, meta_content, _)| {
                name.eq_ignore_ascii_case(meta_name) && content.eq_ignore_ascii_case(meta_content)
            })
            .map(|(_, _, kind)| *kind)
    })
}
