// src/links/mod.rs
// =============================================================================
// Link discovery and URL normalization.
//
// Submodules:
// - extract: finds raw links in page source (anchors + landing-page XML)
// - normalize: resolves raw links to absolute URLs and applies exclusions
// =============================================================================

mod extract;
mod normalize;

pub use extract::extract_links;
pub use normalize::{is_allowed_host, is_excluded, is_non_navigable, normalize_url};
