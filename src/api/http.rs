//! Fetch-backed implementation of [`RemoteApi`].

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{routes, ApiResponse, RemoteApi};
use crate::config::AppConfig;
use crate::error::{UiError, UiResult};
use crate::models::{AnalysisDraft, FieldDraft};

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct ReorderArgs<'a> {
    field_ids: &'a [u32],
}

enum Body {
    Json(String),
    Form(String),
}

impl Body {
    fn json<T: Serialize>(value: &T) -> UiResult<Self> {
        serde_json::to_string(value)
            .map(Body::Json)
            .map_err(|e| UiError::network(format!("Could not encode request: {}", e)))
    }

    fn content_type(&self) -> &'static str {
        match self {
            Body::Json(_) => "application/json",
            Body::Form(_) => "application/x-www-form-urlencoded",
        }
    }

    fn text(&self) -> &str {
        match self {
            Body::Json(s) | Body::Form(s) => s,
        }
    }
}

/// `application/x-www-form-urlencoded` body
pub fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", utf8_percent_encode(k, NON_ALPHANUMERIC), utf8_percent_encode(v, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&")
}

fn js_err(e: JsValue) -> UiError {
    let msg = e
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| e.as_string())
        .unwrap_or_else(|| "Request failed".to_string());
    UiError::network(msg)
}

// ========================
// Client
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    async fn send(&self, method: &str, path: &str, body: Option<Body>) -> UiResult<ApiResponse> {
        let url = self.config.url(path);
        log::debug!("[API] {} {}", method, url);

        let init = RequestInit::new();
        init.set_method(method);
        if let Some(body) = &body {
            init.set_body(&JsValue::from_str(body.text()));
        }
        let request = Request::new_with_str_and_init(&url, &init).map_err(js_err)?;
        request.headers().set("Accept", "application/json").map_err(js_err)?;
        if let Some(body) = &body {
            request.headers().set("Content-Type", body.content_type()).map_err(js_err)?;
        }

        let window = web_sys::window().ok_or_else(|| UiError::network("No window available"))?;
        let value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_err)?;
        let response: Response = value.dyn_into().map_err(js_err)?;
        let status = response.status();
        let text = JsFuture::from(response.text().map_err(js_err)?).await.map_err(js_err)?;
        let text = text.as_string().unwrap_or_default();

        let parsed = ApiResponse::parse(&text, status);
        if let Err(e) = &parsed {
            log::warn!("[API] {} {} -> {}", method, url, e);
        }
        parsed
    }
}

#[async_trait(?Send)]
impl RemoteApi for HttpApi {
    async fn create_analysis(&self, draft: &AnalysisDraft) -> UiResult<u32> {
        let form = encode_form(&[
            ("name", draft.name.as_str()),
            ("description", draft.description.as_str()),
            ("category", draft.category.as_str()),
        ]);
        let resp = self
            .send("POST", &routes::create_analysis(), Some(Body::Form(form)))
            .await?
            .into_result("Failed to create analysis")?;
        ApiResponse::require_id(resp.analysis_id, "an analysis id")
    }

    async fn delete_analysis(&self, analysis_id: u32) -> UiResult<Option<String>> {
        let resp = self
            .send("DELETE", &routes::delete_analysis(analysis_id), None)
            .await?
            .into_result("Failed to delete analysis")?;
        Ok(resp.message)
    }

    async fn duplicate_analysis(&self, analysis_id: u32) -> UiResult<(u32, Option<String>)> {
        let resp = self
            .send("POST", &routes::duplicate_analysis(analysis_id), None)
            .await?
            .into_result("Failed to duplicate analysis")?;
        let id = ApiResponse::require_id(resp.new_analysis_id, "the new analysis id")?;
        Ok((id, resp.message))
    }

    async fn add_field(&self, analysis_id: u32, draft: &FieldDraft) -> UiResult<u32> {
        let resp = self
            .send("POST", &routes::fields(analysis_id), Some(Body::json(draft)?))
            .await?
            .into_result("Failed to add field")?;
        ApiResponse::require_id(resp.field_id, "a field id")
    }

    async fn delete_field(&self, analysis_id: u32, field_id: u32) -> UiResult<()> {
        self.send("DELETE", &routes::field(analysis_id, field_id), None)
            .await?
            .into_result("Failed to delete field")?;
        Ok(())
    }

    async fn reorder_fields(&self, analysis_id: u32, field_ids: &[u32]) -> UiResult<()> {
        let body = Body::json(&ReorderArgs { field_ids })?;
        self.send("POST", &routes::reorder_fields(analysis_id), Some(body))
            .await?
            .into_result("Failed to reorder fields")?;
        Ok(())
    }

    async fn delete_object(&self, analysis_id: u32, object_id: u32) -> UiResult<()> {
        self.send("DELETE", &routes::object(analysis_id, object_id), None)
            .await?
            .into_result("Failed to delete object")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_form() {
        assert_eq!(
            encode_form(&[("name", "TVs & Monitors"), ("category", "")]),
            "name=TVs%20%26%20Monitors&category="
        );
    }

    #[test]
    fn test_reorder_body_shape() {
        let body = Body::json(&ReorderArgs { field_ids: &[3, 1, 2] }).unwrap();
        assert_eq!(body.text(), r#"{"field_ids":[3,1,2]}"#);
        assert_eq!(body.content_type(), "application/json");
    }

    #[test]
    fn test_field_draft_body() {
        let draft = FieldDraft {
            field_name: "Price".to_string(),
            field_type: crate::models::FieldType::Price,
            field_unit: "$".to_string(),
            is_required: false,
        };
        let body = Body::json(&draft).unwrap();
        assert_eq!(
            body.text(),
            r#"{"field_name":"Price","field_type":"price","field_unit":"$","is_required":false}"#
        );
    }
}
