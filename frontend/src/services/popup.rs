//! Share popup window.

use wasm_bindgen::JsValue;

use crate::config::{SHARE_WINDOW_HEIGHT, SHARE_WINDOW_TARGET, SHARE_WINDOW_WIDTH};
use crate::{AppError, AppResult};

/// `window.open` feature string for share popups.
pub fn popup_features() -> String {
    format!(
        "popup=yes,width={},height={},resizable=yes,scrollbars=yes",
        SHARE_WINDOW_WIDTH, SHARE_WINDOW_HEIGHT
    )
}

/// Open `link` in a popup window, detached from this page.
///
/// Returns an error when there is no window or the popup was blocked,
/// in which case the caller should let the link navigate normally.
pub fn open_share_window(link: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser("no global window".to_string()))?;

    let popup = window
        .open_with_url_and_target_and_features(link, SHARE_WINDOW_TARGET, &popup_features())
        .map_err(|e| AppError::Browser(format!("window.open failed: {:?}", e)))?
        .ok_or_else(|| AppError::Browser("share popup was blocked".to_string()))?;

    // Same effect as rel="noopener" on the anchor.
    if let Err(e) = popup.set_opener(&JsValue::NULL) {
        log::debug!("Could not detach share popup: {:?}", e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_features() {
        let features = popup_features();
        assert!(features.contains("width=600"));
        assert!(features.contains("height=480"));
        assert!(!features.contains("noopener"));
    }
}
