//! Common types used across the share buttons.
//!
//! # Categories
//!
//! - **Share Types** - props forwarded to every share button
//! - **Platform Types** - supported social platforms
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::share_link;

// =============================================================================
// Share Types
// =============================================================================

/// Values handed unchanged to every share button of a group.
///
/// No field is validated; an absent value stays absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareProps {
    /// Page to share
    #[serde(default)]
    pub url: Option<String>,
    /// Display text (tweet text, reddit title)
    #[serde(default)]
    pub text: Option<String>,
    /// Ordered tags (hashtags on Twitter)
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl ShareProps {
    /// Build props from the three optional inputs.
    pub fn new(url: Option<String>, text: Option<String>, tags: Option<Vec<String>>) -> Self {
        Self { url, text, tags }
    }

    /// Parse props from a JSON object. Missing keys become `None`.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Props(e.to_string()))
    }
}

// =============================================================================
// Platform Types
// =============================================================================

/// Social platform a share button targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SharePlatform {
    Twitter,
    Facebook,
    Reddit,
}

impl SharePlatform {
    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Twitter",
            SharePlatform::Facebook => "Facebook",
            SharePlatform::Reddit => "Reddit",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "shareTwitter",
            SharePlatform::Facebook => "shareFacebook",
            SharePlatform::Reddit => "shareReddit",
        }
    }

    /// Share link for `props`, or `None` when there is no url to share.
    pub fn share_url(&self, props: &ShareProps) -> Option<String> {
        match self {
            SharePlatform::Twitter => share_link::twitter(props),
            SharePlatform::Facebook => share_link::facebook(props),
            SharePlatform::Reddit => share_link::reddit(props),
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One planned child of a share group.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareButton {
    pub platform: SharePlatform,
    pub props: ShareProps,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Browser API unavailable or failing (window, popup).
    Browser(String),
    /// Share props could not be parsed.
    Props(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
            AppError::Props(msg) => write!(f, "Invalid share props: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_from_json_full() {
        let json = r#"{
            "url": "https://example.com",
            "text": "Hello",
            "tags": ["a", "b"]
        }"#;

        let props = ShareProps::from_json(json).unwrap();
        assert_eq!(props.url.as_deref(), Some("https://example.com"));
        assert_eq!(props.text.as_deref(), Some("Hello"));
        assert_eq!(props.tags, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_props_from_json_missing_fields() {
        let props = ShareProps::from_json("{}").unwrap();
        assert_eq!(props, ShareProps::default());

        let props = ShareProps::from_json(r#"{ "text": "only text" }"#).unwrap();
        assert_eq!(props.url, None);
        assert_eq!(props.tags, None);
    }

    #[test]
    fn test_props_from_json_invalid() {
        let err = ShareProps::from_json(r#"{ "tags": "not-a-list" }"#).unwrap_err();
        assert!(matches!(err, AppError::Props(_)));
        assert!(err.to_string().starts_with("Invalid share props"));
    }

    #[test]
    fn test_platform_classes_are_distinct() {
        let classes = [
            SharePlatform::Twitter.css_class(),
            SharePlatform::Facebook.css_class(),
            SharePlatform::Reddit.css_class(),
        ];
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
        assert_eq!(SharePlatform::Reddit.to_string(), "Reddit");
    }

    #[test]
    fn test_share_url_requires_url() {
        let props = ShareProps::new(None, Some("Hello".into()), Some(vec!["a".into()]));
        assert_eq!(SharePlatform::Twitter.share_url(&props), None);
        assert_eq!(SharePlatform::Facebook.share_url(&props), None);
        assert_eq!(SharePlatform::Reddit.share_url(&props), None);
    }
}
