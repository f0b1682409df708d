//! Theme preference
//!
//! The only state kept in the browser: `localStorage["theme"]`.

use gloo_timers::callback::Timeout;

use crate::animation::THEME_TRANSITION_MS;

pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Anything but a stored `light` means dark
    pub fn parse(stored: Option<&str>) -> Self {
        match stored {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The toggle shows what you would switch to
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Dark => "bi bi-sun-fill",
            Theme::Light => "bi bi-moon-stars",
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load() -> Theme {
    let stored = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    Theme::parse(stored.as_deref())
}

pub fn save(theme: Theme) {
    match storage() {
        Some(s) => {
            if s.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                log::warn!("[THEME] Could not persist theme preference");
            }
        }
        None => log::warn!("[THEME] localStorage unavailable"),
    }
}

/// Set `data-bs-theme` on <html>
pub fn apply(theme: Theme) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else { return };
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("data-bs-theme", theme.as_str());
    }
}

/// Apply with a short body transition, as the toggle does
pub fn apply_animated(theme: Theme) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = &body {
        let _ = body.style().set_property("transition", "all 0.3s ease");
    }
    apply(theme);
    if let Some(body) = body {
        Timeout::new(THEME_TRANSITION_MS, move || {
            let _ = body.style().remove_property("transition");
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_defaults_dark() {
        assert_eq!(Theme::parse(None), Theme::Dark);
        assert_eq!(Theme::parse(Some("light")), Theme::Light);
        assert_eq!(Theme::parse(Some("solarized")), Theme::Dark);
    }

    #[test]
    fn test_toggle_and_icon() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().as_str(), "dark");
        assert_eq!(Theme::Dark.icon_class(), "bi bi-sun-fill");
        assert_eq!(Theme::Light.icon_class(), "bi bi-moon-stars");
    }
}
