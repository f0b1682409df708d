//! Share Links
//!
//! Uses the native share sheet when the browser has one, otherwise copies
//! the analysis link to the clipboard.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::routes;
use crate::notify::Severity;

pub const SHARE_TITLE: &str = "Product Comparison Analysis";
pub const LINK_COPIED: &str = "Link copied to clipboard!";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "navigator"], js_name = share, catch)]
    async fn navigator_share(data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "navigator", "clipboard"], js_name = writeText, catch)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct ShareData<'a> {
    title: &'a str,
    url: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    /// Handed to the share sheet (or the user dismissed it)
    Shared,
    Copied,
    Failed(String),
}

impl ShareOutcome {
    /// Toast to show, if any. The share sheet is its own feedback.
    pub fn notification(&self) -> Option<(String, Severity)> {
        match self {
            ShareOutcome::Shared => None,
            ShareOutcome::Copied => Some((LINK_COPIED.to_string(), Severity::Success)),
            ShareOutcome::Failed(msg) => Some((format!("Could not copy link: {}", msg), Severity::Danger)),
        }
    }
}

/// Absolute link to an analysis page
pub fn share_url(origin: &str, analysis_id: u32) -> String {
    format!("{}{}", origin.trim_end_matches('/'), routes::view(analysis_id))
}

fn has_native_share() -> bool {
    let Some(window) = web_sys::window() else { return false };
    js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("navigator"))
        .and_then(|nav| js_sys::Reflect::has(&nav, &JsValue::from_str("share")))
        .unwrap_or(false)
}

pub async fn share_analysis(analysis_id: u32) -> ShareOutcome {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    let url = share_url(&origin, analysis_id);

    if has_native_share() {
        let data = match serde_wasm_bindgen::to_value(&ShareData { title: SHARE_TITLE, url: &url }) {
            Ok(data) => data,
            Err(e) => return ShareOutcome::Failed(e.to_string()),
        };
        if let Err(e) = navigator_share(data).await {
            log::debug!("[SHARE] Share sheet closed: {:?}", e);
        }
        return ShareOutcome::Shared;
    }

    match clipboard_write_text(&url).await {
        Ok(_) => {
            log::info!("[SHARE] Copied {}", url);
            ShareOutcome::Copied
        }
        Err(e) => {
            log::error!("[SHARE] Clipboard write failed: {:?}", e);
            ShareOutcome::Failed("clipboard unavailable".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_url() {
        assert_eq!(share_url("https://hub.example", 12), "https://hub.example/analysis/12");
        assert_eq!(share_url("http://localhost:5000/", 3), "http://localhost:5000/analysis/3");
    }

    #[test]
    fn test_outcome_notifications() {
        assert_eq!(ShareOutcome::Shared.notification(), None);
        assert_eq!(
            ShareOutcome::Copied.notification(),
            Some(("Link copied to clipboard!".to_string(), Severity::Success))
        );
        let (msg, severity) = ShareOutcome::Failed("denied".to_string()).notification().unwrap();
        assert_eq!(severity, Severity::Danger);
        assert!(msg.ends_with("denied"));
    }
}
