//! Remote console API client.
//!
//! All calls carry the configured request timeout; a timeout surfaces
//! as `FlowError::Timeout` and joins the ordinary search/submission
//! failure paths. Remote error bodies are JSON with a `message` or
//! `error` field, or an array of field-level validation errors that
//! gets joined into one display string.

use anyhow::Result;
use console_core::config::ApiSettings;
use console_core::error::FlowError;
use console_core::pagination::Page;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::{
    BusinessProfileSummary, CreateProcurementRequest, CreatedProcurement, ProductDetail,
    ProductSummary,
};

/// Client for the search and create endpoints the workflow consumes.
#[derive(Clone)]
pub struct ConsoleApi {
    client: Client,
    settings: ApiSettings,
}

impl ConsoleApi {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .build()?;
        Ok(Self { client, settings })
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    /// `GET /business-profiles/search?name=...`
    ///
    /// Empty queries short-circuit: no call is issued and an empty
    /// page is returned.
    pub async fn search_business_profiles(
        &self,
        name: &str,
    ) -> Result<Page<BusinessProfileSummary>, FlowError> {
        if name.trim().is_empty() {
            return Ok(Page::empty());
        }
        self.get_page("/business-profiles/search", "name", name)
            .await
    }

    /// `GET /products/search?query=...` (same short-circuit rule).
    pub async fn search_products(&self, query: &str) -> Result<Page<ProductSummary>, FlowError> {
        if query.trim().is_empty() {
            return Ok(Page::empty());
        }
        self.get_page("/products/search", "query", query).await
    }

    /// `GET /products/{id}` — full detail including the variant list.
    pub async fn get_product(&self, id: &str) -> Result<ProductDetail, FlowError> {
        let url = format!("{}/products/{}", self.settings.base_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| search_error(&url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| search_error(&url, e))?;
        debug!(%status, url = %url, "get_product response");

        if status.is_success() {
            serde_json::from_str(&body)
                .map_err(|e| FlowError::Search(format!("unexpected response body: {e}")))
        } else {
            Err(FlowError::Search(display_message(&body)))
        }
    }

    /// `POST /procurements` — the workflow's single create call.
    pub async fn create_procurement(
        &self,
        request: &CreateProcurementRequest,
    ) -> Result<CreatedProcurement, FlowError> {
        let url = format!("{}/procurements", self.settings.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FlowError::Timeout
                } else {
                    warn!(url = %url, error = %e, "create_procurement request failed");
                    FlowError::Submission(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FlowError::Submission(format!("failed to read response: {e}")))?;
        debug!(%status, body = %body, "create_procurement response");

        if status.is_success() {
            let created: CreatedProcurement = serde_json::from_str(&body)
                .map_err(|e| FlowError::Submission(format!("unexpected response body: {e}")))?;
            info!(
                procurement_id = %created.id,
                invoice_number = %request.invoice_number,
                "procurement created"
            );
            Ok(created)
        } else {
            let message = display_message(&body);
            warn!(%status, message = %message, "procurement create rejected");
            Err(FlowError::Submission(message))
        }
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        param: &str,
        value: &str,
    ) -> Result<Page<T>, FlowError> {
        let url = format!("{}{}", self.settings.base_url, path);
        let page_size = self.settings.page_size.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[(param, value), ("pageSize", page_size.as_str())])
            .send()
            .await
            .map_err(|e| search_error(&url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| search_error(&url, e))?;
        debug!(%status, url = %url, "search response");

        if status.is_success() {
            serde_json::from_str(&body)
                .map_err(|e| FlowError::Search(format!("unexpected response body: {e}")))
        } else {
            Err(FlowError::Search(display_message(&body)))
        }
    }
}

fn search_error(url: &str, e: reqwest::Error) -> FlowError {
    if e.is_timeout() {
        FlowError::Timeout
    } else {
        warn!(url = %url, error = %e, "search request failed");
        FlowError::Search(format!("request failed: {e}"))
    }
}

/// Extract a human-readable message from a remote error body.
fn display_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map
            .get("message")
            .or_else(|| map.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Ok(Value::Array(entries)) => {
            let joined: Vec<String> = entries
                .iter()
                .map(|entry| match entry {
                    Value::String(s) => s.clone(),
                    Value::Object(map) => {
                        let message = map
                            .get("message")
                            .and_then(Value::as_str)
                            .unwrap_or("invalid value");
                        match map.get("field").and_then(Value::as_str) {
                            Some(field) => format!("{field}: {message}"),
                            None => message.to_string(),
                        }
                    }
                    other => other.to_string(),
                })
                .collect();
            joined.join("; ")
        }
        _ => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_wins() {
        assert_eq!(
            display_message(r#"{"message":"invoice number taken"}"#),
            "invoice number taken"
        );
        assert_eq!(display_message(r#"{"error":"bad request"}"#), "bad request");
    }

    #[test]
    fn field_level_errors_join_into_one_string() {
        let body = r#"[
            {"field":"invoiceNumber","message":"required"},
            {"field":"invoiceAmount","message":"must be positive"}
        ]"#;
        assert_eq!(
            display_message(body),
            "invoiceNumber: required; invoiceAmount: must be positive"
        );
    }

    #[test]
    fn plain_string_array_is_joined() {
        assert_eq!(
            display_message(r#"["first problem","second problem"]"#),
            "first problem; second problem"
        );
    }

    #[test]
    fn non_json_bodies_pass_through() {
        assert_eq!(display_message("502 Bad Gateway"), "502 Bad Gateway");
    }
}
