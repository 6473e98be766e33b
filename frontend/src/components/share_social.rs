//! Platform share buttons.
//!
//! Each button accepts `url`, `text` and `tags` and renders a single
//! share link for its platform.

use leptos::*;

use crate::config::{SHARE_BUTTON_CLASS, SHARE_DISABLED_CLASS};
use crate::services::open_share_window;
use crate::{ShareButton, SharePlatform, ShareProps};

#[component]
pub fn ShareSocialTwitter(
    #[prop(optional_no_strip)] url: Option<String>,
    #[prop(optional_no_strip)] text: Option<String>,
    #[prop(optional_no_strip)] tags: Option<Vec<String>>,
) -> impl IntoView {
    view! {
        <ShareSocialLink platform=SharePlatform::Twitter props=ShareProps::new(url, text, tags)/>
    }
}

#[component]
pub fn ShareSocialFacebook(
    #[prop(optional_no_strip)] url: Option<String>,
    #[prop(optional_no_strip)] text: Option<String>,
    #[prop(optional_no_strip)] tags: Option<Vec<String>>,
) -> impl IntoView {
    view! {
        <ShareSocialLink platform=SharePlatform::Facebook props=ShareProps::new(url, text, tags)/>
    }
}

#[component]
pub fn ShareSocialReddit(
    #[prop(optional_no_strip)] url: Option<String>,
    #[prop(optional_no_strip)] text: Option<String>,
    #[prop(optional_no_strip)] tags: Option<Vec<String>>,
) -> impl IntoView {
    view! {
        <ShareSocialLink platform=SharePlatform::Reddit props=ShareProps::new(url, text, tags)/>
    }
}

/// Anchor shared by all platforms.
///
/// Without a url the anchor is inert: `href="#"`, the disabled class and
/// a click that only logs.
#[component]
fn ShareSocialLink(platform: SharePlatform, props: ShareProps) -> impl IntoView {
    let link = platform.share_url(&props);
    let href = link.clone().unwrap_or_else(|| "#".to_string());
    let class = if link.is_some() {
        format!("{} {}", SHARE_BUTTON_CLASS, platform.css_class())
    } else {
        format!("{} {} {}", SHARE_BUTTON_CLASS, platform.css_class(), SHARE_DISABLED_CLASS)
    };

    let on_click = move |ev: ev::MouseEvent| match &link {
        Some(link) => match open_share_window(link) {
            Ok(()) => {
                ev.prevent_default();
                log::debug!("📤 {} share popup opened", platform);
            }
            // Fall back to the anchor's own target="_blank" navigation
            Err(e) => log::warn!("{} share popup unavailable: {}", platform, e),
        },
        None => {
            ev.prevent_default();
            log::warn!("⚠️ {} share skipped: no url provided", platform);
        }
    };

    view! {
        <a
            class=class
            href=href
            target="_blank"
            rel="noopener noreferrer"
            title=format!("Share on {}", platform)
            on:click=on_click
        >
            {platform.label()}
        </a>
    }
}

impl IntoView for ShareButton {
    fn into_view(self) -> View {
        let ShareProps { url, text, tags } = self.props;
        match self.platform {
            SharePlatform::Twitter => view! { <ShareSocialTwitter url=url text=text tags=tags/> }.into_view(),
            SharePlatform::Facebook => view! { <ShareSocialFacebook url=url text=text tags=tags/> }.into_view(),
            SharePlatform::Reddit => view! { <ShareSocialReddit url=url text=text tags=tags/> }.into_view(),
        }
    }
}
