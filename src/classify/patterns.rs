// src/classify/patterns.rs
// =============================================================================
// Built-in classifier: looks at the path segments of a URL.
//
// Documentation sites tend to encode the guide type in the path, e.g.
//   /AWSEC2/latest/UserGuide/concepts.html      -> UserGuidePage
//   /lambda/latest/dg/welcome.html              -> DevGuidePage
//   /ec2/latest/instancetypes/gp.html           -> InstanceTypePage
//
// Anything else is Other("Unknown").
// =============================================================================

use super::{Classifier, PageType};
use async_trait::async_trait;
use url::Url;

const USER_GUIDE_SEGMENTS: &[&str] = &["userguide", "user-guide", "ug"];
const DEV_GUIDE_SEGMENTS: &[&str] = &["devguide", "developerguide", "developer-guide", "dg"];
const INSTANCE_TYPE_SEGMENTS: &[&str] = &["instancetypes", "instance-types"];

const UNKNOWN_PAGE_TYPE: &str = "Unknown";

#[derive(Debug, Clone, Default)]
pub struct UrlPatternClassifier;

impl UrlPatternClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous core of the classifier, also used by the `classify` command.
    pub fn classify_url(&self, url: &str) -> PageType {
        let Ok(parsed) = Url::parse(url) else {
            return PageType::Other(UNKNOWN_PAGE_TYPE.to_string());
        };

        let segments: Vec<String> = parsed
            .path_segments()
            .map(|segments| segments.map(|s| s.to_ascii_lowercase()).collect())
            .unwrap_or_default();

        let has_any = |names: &[&str]| segments.iter().any(|s| names.contains(&s.as_str()));

        // instance types first: those pages often live under a user guide path
        if has_any(INSTANCE_TYPE_SEGMENTS) {
            PageType::InstanceTypePage
        } else if has_any(USER_GUIDE_SEGMENTS) {
            PageType::UserGuidePage
        } else if has_any(DEV_GUIDE_SEGMENTS) {
            PageType::DevGuidePage
        } else {
            PageType::Other(UNKNOWN_PAGE_TYPE.to_string())
        }
    }
}

#[async_trait]
impl Classifier for UrlPatternClassifier {
    async fn classify(&self, url: &str) -> PageType {
        self.classify_url(url)
    }
}
