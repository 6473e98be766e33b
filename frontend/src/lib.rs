//! Share Buttons - Frontend Rust/Leptos Components
//!
//! Social share buttons for Twitter, Facebook and Reddit, compiled to
//! WebAssembly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ShareButtonsHorizontal  (div.horizontalGroup)               │
//! ├───────────────────┬───────────────────┬─────────────────────┤
//! │ ShareSocialTwitter│ShareSocialFacebook│ ShareSocialReddit    │
//! └───────────────────┴───────────────────┴─────────────────────┘
//!          each child receives the same { url, text, tags }
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (ShareProps, SharePlatform, etc.)
//! - [`components`] - UI components (group and platform buttons)
//! - [`services`] - Browser helpers (share links, popup window)

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Share
    ShareProps, ShareButton,
    // Platforms
    SharePlatform,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// =============================================================================
// Application
// =============================================================================

/// Root component, mounted by the bin entry point (`src/main.rs`).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=SharePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Demo page sharing the current document.
#[component]
fn SharePage() -> impl IntoView {
    let props = page_share_props();
    let title = props.text.clone().unwrap_or_else(|| APP_NAME.to_string());

    log::debug!("Share props: {:?}", props);

    view! {
        <Title text=title/>
        <div class="container">
            <ShareButtonsHorizontal url=props.url text=props.text tags=props.tags/>
        </div>
    }
}

/// Share props for the current page.
///
/// Taken from the `#share-props` JSON element when present, otherwise
/// from the location, the document title and [`DEFAULT_TAGS`].
fn page_share_props() -> ShareProps {
    let Some(window) = web_sys::window() else {
        log::warn!("No global window, sharing nothing");
        return ShareProps::default();
    };
    let document = window.document();

    let embedded = document
        .as_ref()
        .and_then(|d| d.get_element_by_id(PROPS_ELEMENT_ID))
        .and_then(|el| el.text_content());
    if let Some(json) = embedded {
        match ShareProps::from_json(&json) {
            Ok(props) => return props,
            Err(e) => log::warn!("{}", e),
        }
    }

    ShareProps {
        url: window.location().href().ok(),
        text: document.map(|d| d.title()).filter(|t| !t.is_empty()),
        tags: Some(DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()),
    }
}
