//! Form helpers shared by the setup preview and the object form.

use std::collections::HashMap;

use crate::table_sort::MAX_STARS;

pub const REQUIRED_WARNING: &str = "Please fill in all required fields";

/// Outcome of checking one required input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    Valid,
    Invalid,
}

impl FieldCheck {
    pub fn of(value: &str) -> Self {
        if value.trim().is_empty() {
            FieldCheck::Invalid
        } else {
            FieldCheck::Valid
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            FieldCheck::Valid => "is-valid",
            FieldCheck::Invalid => "is-invalid",
        }
    }
}

/// Posted name of a field's input
pub fn input_name(field_id: u32) -> String {
    format!("field_{}", field_id)
}

/// Required inputs that are still blank, in form order
pub fn missing_required<'a>(required: &'a [String], values: &HashMap<String, String>) -> Vec<&'a str> {
    required
        .iter()
        .filter(|name| FieldCheck::of(values.get(*name).map(String::as_str).unwrap_or("")) == FieldCheck::Invalid)
        .map(String::as_str)
        .collect()
}

/// Label used in the form preview: `Name *` for required, `(unit)` when set
pub fn preview_label(name: &str, required: bool, unit: Option<&str>) -> String {
    let mut label = name.to_string();
    if required {
        label.push_str(" *");
    }
    if let Some(unit) = unit.filter(|u| !u.is_empty()) {
        label.push_str(&format!(" ({})", unit));
    }
    label
}

pub fn preview_placeholder(name: &str) -> String {
    format!("Enter {}", name.to_lowercase())
}

// ========================
// Star Rating Input
// ========================

/// Stored rating, clamped to 0..=5
pub fn parse_rating(raw: &str) -> usize {
    raw.trim().parse::<usize>().map(|r| r.min(MAX_STARS)).unwrap_or(0)
}

/// Icon class and color of one star when `shown` stars are lit
pub fn star_look(index: usize, shown: usize, hovering: bool) -> (&'static str, &'static str) {
    if index < shown {
        ("bi bi-star-fill rating-star", if hovering { "#ffc107" } else { "#ffb400" })
    } else {
        ("bi bi-star rating-star", "#dee2e6")
    }
}

/// Image preview only for a non-empty URL
pub fn image_preview(url: &str) -> Option<String> {
    Some(url.trim().to_string()).filter(|u| !u.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_check() {
        assert_eq!(FieldCheck::of("  "), FieldCheck::Invalid);
        assert_eq!(FieldCheck::of("x").class(), "is-valid");
        assert!(missing_required(&[], &HashMap::new()).is_empty());
    }

    #[test]
    fn test_missing_required() {
        let required = vec!["object_name".to_string(), input_name(3)];
        let mut values = HashMap::new();
        values.insert("object_name".to_string(), "Phone".to_string());
        assert_eq!(missing_required(&required, &values), vec!["field_3"]);
        values.insert("field_3".to_string(), "4".to_string());
        assert!(missing_required(&required, &values).is_empty());
    }

    #[test]
    fn test_preview_label() {
        assert_eq!(preview_label("Price", true, Some("$")), "Price * ($)");
        assert_eq!(preview_label("Color", false, Some("")), "Color");
        assert_eq!(preview_label("Pages", false, None), "Pages");
        assert_eq!(preview_placeholder("Screen Size"), "Enter screen size");
    }

    #[test]
    fn test_stars() {
        assert_eq!(parse_rating("4"), 4);
        assert_eq!(parse_rating("12"), 5);
        assert_eq!(parse_rating(""), 0);
        assert_eq!(star_look(2, 3, false), ("bi bi-star-fill rating-star", "#ffb400"));
        assert_eq!(star_look(2, 3, true).1, "#ffc107");
        assert_eq!(star_look(3, 3, true), ("bi bi-star rating-star", "#dee2e6"));
    }

    #[test]
    fn test_image_preview() {
        assert_eq!(image_preview("  "), None);
        assert_eq!(image_preview(" http://x/p.png "), Some("http://x/p.png".to_string()));
    }
}
