//! Server API
//!
//! The remote collaborator behind every create/delete/reorder, as a trait so
//! pages can be driven by a fake in tests. `HttpApi` is the fetch-backed one.

mod http;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{UiError, UiResult};
use crate::models::{AnalysisDraft, FieldDraft};

pub use http::HttpApi;

/// Every endpoint answers with this envelope
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub field_id: Option<u32>,
    #[serde(default)]
    pub analysis_id: Option<u32>,
    #[serde(default)]
    pub new_analysis_id: Option<u32>,
}

impl ApiResponse {
    /// Parse a body regardless of HTTP status; the envelope carries the outcome
    pub fn parse(body: &str, status: u16) -> UiResult<Self> {
        serde_json::from_str(body).map_err(|e| {
            UiError::network(format!("Unexpected response from server (HTTP {}): {}", status, e))
        })
    }

    /// `success: false` becomes a network failure with the server's message
    pub fn into_result(self, fallback: &str) -> UiResult<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(UiError::network(
                self.error.filter(|e| !e.is_empty()).unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }

    fn require_id(id: Option<u32>, what: &str) -> UiResult<u32> {
        id.ok_or_else(|| UiError::network(format!("Server did not return {}", what)))
    }
}

/// Server routes
pub mod routes {
    pub fn create_analysis() -> String {
        "/create-analysis".to_string()
    }

    pub fn delete_analysis(analysis_id: u32) -> String {
        format!("/analysis/{}/delete", analysis_id)
    }

    pub fn duplicate_analysis(analysis_id: u32) -> String {
        format!("/analysis/{}/duplicate", analysis_id)
    }

    pub fn fields(analysis_id: u32) -> String {
        format!("/analysis/{}/fields", analysis_id)
    }

    pub fn field(analysis_id: u32, field_id: u32) -> String {
        format!("/analysis/{}/fields/{}", analysis_id, field_id)
    }

    pub fn reorder_fields(analysis_id: u32) -> String {
        format!("/analysis/{}/fields/reorder", analysis_id)
    }

    pub fn object(analysis_id: u32, object_id: u32) -> String {
        format!("/analysis/{}/objects/{}", analysis_id, object_id)
    }

    pub fn new_object(analysis_id: u32) -> String {
        format!("/analysis/{}/objects/new", analysis_id)
    }

    pub fn create_object(analysis_id: u32) -> String {
        format!("/analysis/{}/objects", analysis_id)
    }

    pub fn edit_object(analysis_id: u32, object_id: u32) -> String {
        format!("/analysis/{}/objects/{}/edit", analysis_id, object_id)
    }

    pub fn view(analysis_id: u32) -> String {
        format!("/analysis/{}", analysis_id)
    }

    pub fn setup(analysis_id: u32) -> String {
        format!("/analysis/{}/setup", analysis_id)
    }

    pub fn export(analysis_id: u32) -> String {
        format!("/analysis/{}/export", analysis_id)
    }
}

/// Operations the pages need from the server
#[async_trait(?Send)]
pub trait RemoteApi {
    /// Returns the new analysis id
    async fn create_analysis(&self, draft: &AnalysisDraft) -> UiResult<u32>;

    /// Returns the server's confirmation message, if any
    async fn delete_analysis(&self, analysis_id: u32) -> UiResult<Option<String>>;

    /// Returns the copy's id and the server's message
    async fn duplicate_analysis(&self, analysis_id: u32) -> UiResult<(u32, Option<String>)>;

    /// Returns the new field id
    async fn add_field(&self, analysis_id: u32, draft: &FieldDraft) -> UiResult<u32>;

    async fn delete_field(&self, analysis_id: u32, field_id: u32) -> UiResult<()>;

    /// Full ordered id sequence of the analysis' fields
    async fn reorder_fields(&self, analysis_id: u32, field_ids: &[u32]) -> UiResult<()>;

    async fn delete_object(&self, analysis_id: u32, object_id: u32) -> UiResult<()>;
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Scriptable in-memory server
    #[derive(Default)]
    pub struct FakeApi {
        /// When set, every call fails with this message
        pub fail_with: RefCell<Option<String>>,
        pub next_id: Cell<u32>,
        pub calls: RefCell<Vec<String>>,
        pub reorders: RefCell<Vec<Vec<u32>>>,
    }

    impl FakeApi {
        pub fn failing(msg: &str) -> Self {
            let api = Self::default();
            *api.fail_with.borrow_mut() = Some(msg.to_string());
            api
        }

        fn record(&self, call: String) -> UiResult<()> {
            self.calls.borrow_mut().push(call);
            match self.fail_with.borrow().as_ref() {
                Some(msg) => Err(UiError::network(msg.clone())),
                None => Ok(()),
            }
        }

        fn new_id(&self) -> u32 {
            let id = self.next_id.get() + 100;
            self.next_id.set(self.next_id.get() + 1);
            id
        }
    }

    #[async_trait(?Send)]
    impl RemoteApi for FakeApi {
        async fn create_analysis(&self, draft: &AnalysisDraft) -> UiResult<u32> {
            self.record(format!("create_analysis {}", draft.name))?;
            Ok(self.new_id())
        }

        async fn delete_analysis(&self, analysis_id: u32) -> UiResult<Option<String>> {
            self.record(format!("delete_analysis {}", analysis_id))?;
            Ok(Some("Analysis deleted successfully".to_string()))
        }

        async fn duplicate_analysis(&self, analysis_id: u32) -> UiResult<(u32, Option<String>)> {
            self.record(format!("duplicate_analysis {}", analysis_id))?;
            Ok((self.new_id(), None))
        }

        async fn add_field(&self, analysis_id: u32, draft: &FieldDraft) -> UiResult<u32> {
            self.record(format!("add_field {} {}", analysis_id, draft.field_name))?;
            Ok(self.new_id())
        }

        async fn delete_field(&self, analysis_id: u32, field_id: u32) -> UiResult<()> {
            self.record(format!("delete_field {} {}", analysis_id, field_id))
        }

        async fn reorder_fields(&self, analysis_id: u32, field_ids: &[u32]) -> UiResult<()> {
            self.reorders.borrow_mut().push(field_ids.to_vec());
            self.record(format!("reorder_fields {}", analysis_id))
        }

        async fn delete_object(&self, analysis_id: u32, object_id: u32) -> UiResult<()> {
            self.record(format!("delete_object {} {}", analysis_id, object_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failure_envelope() {
        let resp = ApiResponse::parse(r#"{"success": false, "error": "Field name is required"}"#, 400).unwrap();
        assert_eq!(resp.into_result("x"), Err(UiError::network("Field name is required")));
    }

    #[test]
    fn test_missing_error_uses_fallback() {
        let resp = ApiResponse::parse(r#"{"success": false}"#, 500).unwrap();
        assert_eq!(resp.into_result("Failed to delete field"), Err(UiError::network("Failed to delete field")));
    }

    #[test]
    fn test_success_carries_ids() {
        let resp = ApiResponse::parse(r#"{"success": true, "field_id": 12, "message": "ok"}"#, 200)
            .unwrap()
            .into_result("x")
            .unwrap();
        assert_eq!(ApiResponse::require_id(resp.field_id, "a field id"), Ok(12));
        assert!(ApiResponse::require_id(resp.analysis_id, "an analysis id").is_err());
    }

    #[test]
    fn test_non_json_body_is_network_error() {
        let err = ApiResponse::parse("<html>502</html>", 502).unwrap_err();
        assert!(matches!(err, UiError::Network(msg) if msg.contains("HTTP 502")));
    }

    #[test]
    fn test_routes() {
        assert_eq!(routes::reorder_fields(3), "/analysis/3/fields/reorder");
        assert_eq!(routes::field(3, 9), "/analysis/3/fields/9");
        assert_eq!(routes::edit_object(1, 2), "/analysis/1/objects/2/edit");
        assert_eq!(routes::delete_analysis(5), "/analysis/5/delete");
    }
}
