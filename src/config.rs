//! Frontend Configuration
//!
//! Optional overrides come from `window.__COMPARE_HUB_CONFIG__`, set by the
//! server template before the wasm bundle loads. Everything has a default.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::animation::DeleteAnimation;

const CONFIG_GLOBAL: &str = "__COMPARE_HUB_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for REST calls; empty means same origin
    pub api_base: String,
    /// How long a notification stays up when the caller gives no duration
    pub notification_ms: u32,
    /// Preselected animation in the delete-analysis dialog
    pub delete_animation: DeleteAnimation,
    pub log_level: String,
    /// Lines kept by the rolling logger
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notification_ms: 5000,
            delete_animation: DeleteAnimation::Zoom,
            log_level: "info".to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the config global. Logging is not up yet, so problems are returned as text.
    pub fn load() -> (Self, Option<String>) {
        let Some(window) = web_sys::window() else {
            return (Self::default(), None);
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return (Self::default(), None);
        }
        match serde_wasm_bindgen::from_value::<AppConfig>(value) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(format!("Ignoring invalid {}: {}", CONFIG_GLOBAL, e))),
        }
    }

    /// Absolute-or-relative URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
