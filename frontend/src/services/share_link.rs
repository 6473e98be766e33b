//! Share link construction for each platform.
//!
//! Every value is percent-encoded; absent values drop their parameter.
//! A link is only produced when there is a url to share.

use crate::config::{FACEBOOK_SHARE_ENDPOINT, REDDIT_SHARE_ENDPOINT, TWITTER_SHARE_ENDPOINT};
use crate::ShareProps;

/// Twitter web intent: `url`, `text` and comma separated `hashtags`.
pub fn twitter(props: &ShareProps) -> Option<String> {
    let url = props.url.as_deref()?;
    let hashtags = props.tags.as_deref().map(hashtags).filter(|h| !h.is_empty());

    Some(with_query(
        TWITTER_SHARE_ENDPOINT,
        &[
            ("url", Some(url)),
            ("text", props.text.as_deref()),
            ("hashtags", hashtags.as_deref()),
        ],
    ))
}

/// Facebook sharer. Text and tags are not supported by the endpoint.
pub fn facebook(props: &ShareProps) -> Option<String> {
    let url = props.url.as_deref()?;
    Some(with_query(FACEBOOK_SHARE_ENDPOINT, &[("u", Some(url))]))
}

/// Reddit submit form, with the text as post title.
pub fn reddit(props: &ShareProps) -> Option<String> {
    let url = props.url.as_deref()?;
    Some(with_query(
        REDDIT_SHARE_ENDPOINT,
        &[("url", Some(url)), ("title", props.text.as_deref())],
    ))
}

/// Normalize tags into Twitter's `hashtags` value.
///
/// Tags are trimmed, a leading `#` is stripped and empty tags are skipped.
pub fn hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| tag.trim().trim_start_matches('#'))
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Callers always pass their url parameter first, so the query is never empty.
fn with_query(endpoint: &str, params: &[(&str, Option<&str>)]) -> String {
    let query = params
        .iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, urlencoding::encode(v))))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", endpoint, query)
}
