//! Horizontal group of share buttons.

use leptos::*;

use crate::config::HORIZONTAL_GROUP_CLASS;
use crate::{ShareButton, SharePlatform, ShareProps};

/// Platforms of the horizontal group, in render order.
pub const HORIZONTAL_ORDER: [SharePlatform; 3] = [
    SharePlatform::Twitter,
    SharePlatform::Facebook,
    SharePlatform::Reddit,
];

/// Children of a horizontal group, each holding a copy of `props`.
pub fn horizontal_buttons(props: &ShareProps) -> [ShareButton; 3] {
    HORIZONTAL_ORDER.map(|platform| ShareButton {
        platform,
        props: props.clone(),
    })
}

/// Twitter, Facebook and Reddit share buttons laid out in a row.
///
/// Inputs are forwarded as-is, absent ones included:
/// `<ShareButtonsHorizontal url=Some(url) tags=Some(tags)/>`.
#[component]
pub fn ShareButtonsHorizontal(
    /// Page to share
    #[prop(optional_no_strip)]
    url: Option<String>,
    /// Display text
    #[prop(optional_no_strip)]
    text: Option<String>,
    /// Ordered tags
    #[prop(optional_no_strip)]
    tags: Option<Vec<String>>,
) -> impl IntoView {
    let share_props = ShareProps { url, text, tags };

    view! {
        <div class=HORIZONTAL_GROUP_CLASS>
            {horizontal_buttons(&share_props).into_iter().collect_view()}
        </div>
    }
}
