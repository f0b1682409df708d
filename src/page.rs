//! Page Data
//!
//! The server renders each page's initial state as JSON into
//! `<script id="page-data" type="application/json">`; the app mounts the
//! matching page from it.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{UiError, UiResult};
use crate::models::{Analysis, CategoryCount, ComparedObject, Field};
use crate::notify::Severity;

pub const PAGE_DATA_ID: &str = "page-data";

/// Server flash message, shown as a notification on load
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Flash {
    pub category: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub total_analyses: u32,
    #[serde(default)]
    pub total_objects: u32,
    #[serde(default)]
    pub recent_analyses: Vec<Analysis>,
    #[serde(default)]
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetupData {
    pub analysis: Analysis,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewData {
    pub analysis: Analysis,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub objects: Vec<ComparedObject>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectFormData {
    pub analysis: Analysis,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Present when editing an existing object
    #[serde(default)]
    pub object: Option<ComparedObject>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageData {
    Dashboard(DashboardData),
    AnalysisSetup(SetupData),
    AnalysisView(ViewData),
    ObjectForm(ObjectFormData),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PageKind {
    Dashboard,
    AnalysisSetup,
    AnalysisView,
    ObjectForm,
}

#[derive(Deserialize)]
struct Envelope {
    page: PageKind,
    #[serde(default)]
    flashes: Vec<Flash>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagePayload {
    pub flashes: Vec<Flash>,
    pub page: PageData,
}

impl PageData {
    pub fn name(&self) -> &'static str {
        match self {
            PageData::Dashboard(_) => "dashboard",
            PageData::AnalysisSetup(_) => "analysis_setup",
            PageData::AnalysisView(_) => "analysis_view",
            PageData::ObjectForm(_) => "object_form",
        }
    }
}

impl PagePayload {
    /// The page tag picks the shape; the rest of the object is that page's data.
    /// Goes through `Value` so integer-keyed maps (object values) deserialize.
    pub fn from_json(json: &str) -> UiResult<Self> {
        let invalid = |e: serde_json::Error| UiError::validation(format!("Invalid page data: {}", e));
        let value: Value = serde_json::from_str(json).map_err(invalid)?;
        let envelope = Envelope::deserialize(&value).map_err(invalid)?;
        let page = match envelope.page {
            PageKind::Dashboard => PageData::Dashboard(DashboardData::deserialize(&value).map_err(invalid)?),
            PageKind::AnalysisSetup => PageData::AnalysisSetup(SetupData::deserialize(&value).map_err(invalid)?),
            PageKind::AnalysisView => PageData::AnalysisView(ViewData::deserialize(&value).map_err(invalid)?),
            PageKind::ObjectForm => PageData::ObjectForm(ObjectFormData::deserialize(&value).map_err(invalid)?),
        };
        Ok(Self { flashes: envelope.flashes, page })
    }

    /// Read the embedded payload from the document
    pub fn load() -> UiResult<Self> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(PAGE_DATA_ID))
            .and_then(|el| el.text_content())
            .ok_or_else(|| UiError::validation(format!("Missing #{} element", PAGE_DATA_ID)))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_payload() {
        let payload = PagePayload::from_json(
            r#"{
                "page": "dashboard",
                "total_analyses": 2,
                "recent_analyses": [{"id": 1, "name": "Phones", "object_count": 3}],
                "categories": [{"category": "Electronics", "count": 2}],
                "flashes": [{"category": "error", "message": "Analysis not found!"}]
            }"#,
        )
        .unwrap();
        assert_eq!(payload.flashes[0].category, Severity::Danger);
        let PageData::Dashboard(data) = payload.page else { panic!("wrong page") };
        assert_eq!(data.total_analyses, 2);
        assert_eq!(data.total_objects, 0);
        assert_eq!(data.recent_analyses[0].object_count, Some(3));
    }

    #[test]
    fn test_setup_payload_without_flashes() {
        let payload = PagePayload::from_json(
            r#"{"page": "analysis_setup",
                "analysis": {"id": 4, "name": "Shoes", "category": "Fashion"},
                "fields": [{"id": 9, "field_name": "Size", "field_type": "text", "is_required": true, "display_order": 0}]}"#,
        )
        .unwrap();
        assert!(payload.flashes.is_empty());
        assert_eq!(payload.page.name(), "analysis_setup");
        let PageData::AnalysisSetup(data) = payload.page else { panic!("wrong page") };
        assert_eq!(data.analysis.category.as_deref(), Some("Fashion"));
        assert!(data.fields[0].is_required);
    }

    #[test]
    fn test_view_payload_keeps_integer_value_keys() {
        let payload = PagePayload::from_json(
            r#"{"page": "analysis_view",
                "analysis": {"id": 4, "name": "Shoes"},
                "fields": [{"id": 1, "field_name": "Price", "field_type": "price"}],
                "objects": [{"id": 2, "object_name": "Runner", "values": {"1": "89.99"}}]}"#,
        )
        .unwrap();
        let PageData::AnalysisView(data) = payload.page else { panic!("wrong page") };
        assert_eq!(data.objects[0].value(1), Some("89.99"));
    }

    #[test]
    fn test_unknown_page_is_rejected() {
        let err = PagePayload::from_json(r#"{"page": "settings"}"#).unwrap_err();
        assert!(err.message().starts_with("Invalid page data"));
    }
}
