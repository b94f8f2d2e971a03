//! Platform classification for profile URLs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Social platform a profile URL belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    Linkedin,
    Tiktok,
    Youtube,
    Unknown,
}

/// Ordered domain-fragment table. First match wins, so overlapping
/// fragments (x.com inside a longer host) resolve predictably.
const DOMAIN_TABLE: &[(&str, Platform)] = &[
    ("twitter.com", Platform::Twitter),
    ("x.com", Platform::Twitter),
    ("facebook.com", Platform::Facebook),
    ("instagram.com", Platform::Instagram),
    ("linkedin.com", Platform::Linkedin),
    ("tiktok.com", Platform::Tiktok),
    ("youtube.com", Platform::Youtube),
];

impl Platform {
    /// Classify a URL by case-insensitive substring match against the
    /// domain table. Total: anything unrecognized is `Unknown`.
    pub fn classify(url: &str) -> Platform {
        let lower = url.to_ascii_lowercase();
        DOMAIN_TABLE
            .iter()
            .find(|(fragment, _)| lower.contains(fragment))
            .map(|&(_, platform)| platform)
            .unwrap_or(Platform::Unknown)
    }

    /// Lowercase wire name of the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_domains() {
        assert_eq!(
            Platform::classify("https://twitter.com/alice"),
            Platform::Twitter
        );
        assert_eq!(Platform::classify("https://x.com/alice"), Platform::Twitter);
        assert_eq!(
            Platform::classify("https://www.facebook.com/bob"),
            Platform::Facebook
        );
        assert_eq!(
            Platform::classify("https://instagram.com/carol"),
            Platform::Instagram
        );
        assert_eq!(
            Platform::classify("https://www.linkedin.com/in/dave"),
            Platform::Linkedin
        );
        assert_eq!(
            Platform::classify("https://tiktok.com/@erin"),
            Platform::Tiktok
        );
        assert_eq!(
            Platform::classify("https://youtube.com/@frank"),
            Platform::Youtube
        );
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(
            Platform::classify("HTTPS://TWITTER.COM/Alice"),
            Platform::Twitter
        );
        assert_eq!(
            Platform::classify("https://www.TikTok.com/@erin"),
            Platform::Tiktok
        );
    }

    #[test]
    fn test_classify_unknown_never_fails() {
        assert_eq!(Platform::classify("https://example.org/me"), Platform::Unknown);
        assert_eq!(Platform::classify(""), Platform::Unknown);
        assert_eq!(Platform::classify("not a url at all"), Platform::Unknown);
    }

    #[test]
    fn test_serde_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Platform::Linkedin).unwrap(),
            "\"linkedin\""
        );
        let parsed: Platform = serde_json::from_str("\"youtube\"").unwrap();
        assert_eq!(parsed, Platform::Youtube);
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(Platform::Twitter.to_string(), "twitter");
        assert_eq!(Platform::Unknown.to_string(), "unknown");
    }
}
