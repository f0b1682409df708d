//! Application Context
//!
//! Shared collaborators provided via Leptos Context API.

use leptos::prelude::*;

use crate::animation::DeleteAnimation;
use crate::api::HttpApi;
use crate::config::AppConfig;
use crate::notify::NotificationCenter;
use crate::theme::{self, Theme};

/// App-wide handles, cheap to copy into closures
#[derive(Clone, Copy)]
pub struct AppContext {
    pub notifier: NotificationCenter,
    /// Current theme; changes are persisted and applied by `toggle_theme`
    pub theme: RwSignal<Theme>,
    /// Whether the create-analysis modal is open (Ctrl/Cmd+N opens it)
    pub create_modal_open: RwSignal<bool>,
    api: StoredValue<HttpApi>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let initial = theme::load();
        theme::apply(initial);
        Self {
            notifier: NotificationCenter::new(config.notification_ms),
            theme: RwSignal::new(initial),
            create_modal_open: RwSignal::new(false),
            api: StoredValue::new(HttpApi::new(config.clone())),
            config: StoredValue::new(config),
        }
    }

    /// REST client for a spawned task
    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    pub fn default_delete_animation(&self) -> DeleteAnimation {
        self.config.with_value(|c| c.delete_animation)
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        log::info!("[THEME] Switching to {}", next.as_str());
        self.theme.set(next);
        theme::save(next);
        theme::apply_animated(next);
    }
}
