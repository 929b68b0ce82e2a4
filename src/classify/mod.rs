// src/classify/mod.rs
// =============================================================================
// Page classification.
//
// The crawler asks a Classifier what kind of page a URL is and only extracts
// content from page types on the configured allow-list. The classifier is a
// capability the crawler calls, so it's a trait: the built-in implementation
// matches URL patterns, tests plug in fakes.
//
// Rust concepts:
// - Traits with async methods (via async-trait)
// - FromStr / Display for converting enums to and from their tag strings
// =============================================================================

mod patterns;

pub use patterns::UrlPatternClassifier;

use async_trait::async_trait;
use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Categorical page tag produced by a classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageType {
    UserGuidePage,
    DevGuidePage,
    InstanceTypePage,
    /// Any tag the crawler has no special knowledge of.
    Other(String),
}

impl PageType {
    /// The allow-list used when none is configured.
    pub fn default_allowed() -> Vec<PageType> {
        vec![
            PageType::UserGuidePage,
            PageType::DevGuidePage,
            PageType::InstanceTypePage,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            PageType::UserGuidePage => "UserGuidePage",
            PageType::DevGuidePage => "DevGuidePage",
            PageType::InstanceTypePage => "InstanceTypePage",
            PageType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "UserGuidePage" => PageType::UserGuidePage,
            "DevGuidePage" => PageType::DevGuidePage,
            "InstanceTypePage" => PageType::InstanceTypePage,
            other => PageType::Other(other.to_string()),
        })
    }
}

impl Serialize for PageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Maps a normalized URL to a page type.
///
/// Implementations must be side-effect free from the crawler's point of
/// view; they may still do network or pattern-matching work internally.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, url: &str) -> PageType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_strings() {
        for tag in ["UserGuidePage", "DevGuidePage", "InstanceTypePage", "BlogPage"] {
            let page_type: PageType = tag.parse().unwrap();
            assert_eq!(page_type.to_string(), tag);
        }
        assert_eq!(
            "BlogPage".parse::<PageType>().unwrap(),
            PageType::Other("BlogPage".to_string())
        );
    }

    #[test]
    fn test_serializes_as_plain_tag() {
        let json = serde_json::to_string(&PageType::DevGuidePage).unwrap();
        assert_eq!(json, r#""DevGuidePage""#);
    }
}
