//! Application configuration.
//!
//! Centralized configuration for the share buttons.
//! Class names must stay in sync with `style/share.css`.

/// Class applied to the horizontal group container.
pub const HORIZONTAL_GROUP_CLASS: &str = "horizontalGroup";

/// Base class shared by every share button.
pub const SHARE_BUTTON_CLASS: &str = "shareButton";

/// Added to a share button that has no url to share.
pub const SHARE_DISABLED_CLASS: &str = "shareDisabled";

/// Twitter web intent endpoint.
pub const TWITTER_SHARE_ENDPOINT: &str = "https://twitter.com/intent/tweet";

/// Facebook sharer endpoint.
///
/// Only the `u` parameter is honored by Facebook.
pub const FACEBOOK_SHARE_ENDPOINT: &str = "https://www.facebook.com/sharer/sharer.php";

/// Reddit submit endpoint.
pub const REDDIT_SHARE_ENDPOINT: &str = "https://www.reddit.com/submit";

/// Window name used for share popups.
pub const SHARE_WINDOW_TARGET: &str = "_blank";

/// Share popup width (in pixels).
pub const SHARE_WINDOW_WIDTH: u32 = 600;

/// Share popup height (in pixels).
pub const SHARE_WINDOW_HEIGHT: u32 = 480;

/// Id of the optional `<script type="application/json">` element
/// holding the demo page's share props.
pub const PROPS_ELEMENT_ID: &str = "share-props";

/// Tags used by the demo app when the host page provides none.
pub const DEFAULT_TAGS: &[&str] = &["share", "demo"];

/// Application name, used as the page title fallback.
pub const APP_NAME: &str = "Share Buttons";
