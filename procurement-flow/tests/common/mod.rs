//! Common utilities for the HTTP-level workflow tests.

use console_core::config::ApiSettings;
use procurement_flow::models::BusinessProfileSummary;
use procurement_flow::services::ConsoleApi;
use serde_json::json;
use wiremock::MockServer;

pub struct TestApi {
    pub server: MockServer,
    pub api: ConsoleApi,
}

/// Spawn a mock remote API and a client pointed at it.
pub async fn spawn() -> TestApi {
    console_core::telemetry::try_init_tracing("info");
    let server = MockServer::start().await;
    let api = ConsoleApi::new(ApiSettings::for_base_url(server.uri()))
        .expect("failed to build API client");
    TestApi { server, api }
}

/// Same, but with a short request timeout for timeout-path tests.
pub async fn spawn_with_timeout_secs(timeout_secs: u64) -> TestApi {
    let server = MockServer::start().await;
    let mut settings = ApiSettings::for_base_url(server.uri());
    settings.timeout_secs = timeout_secs;
    let api = ConsoleApi::new(settings).expect("failed to build API client");
    TestApi { server, api }
}

pub fn acme_vendor() -> BusinessProfileSummary {
    BusinessProfileSummary {
        id: "bp-1".to_string(),
        name: "Acme Textiles".to_string(),
        gstin: Some("27AAPFU0939F1ZV".to_string()),
        city: Some("Surat".to_string()),
    }
}

pub fn vendor_page(items: serde_json::Value) -> serde_json::Value {
    let count = items.as_array().map(|a| a.len()).unwrap_or(0);
    json!({
        "items": items,
        "total": count,
        "page": 1,
        "pageSize": 20,
        "totalPages": if count == 0 { 0 } else { 1 },
    })
}
