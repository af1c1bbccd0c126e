use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Settings for the remote console API client.
#[derive(Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub search_debounce_ms: u64,
    pub page_size: i32,
}

impl ApiSettings {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let base_url = env::var("CONSOLE_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());
        let timeout_secs = env::var("CONSOLE_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?;
        let search_debounce_ms = env::var("CONSOLE_SEARCH_DEBOUNCE_MS")
            .unwrap_or_else(|_| "500".to_string())
            .parse()?;
        let page_size = env::var("CONSOLE_PAGE_SIZE")
            .unwrap_or_else(|_| "20".to_string())
            .parse()?;

        Ok(Self {
            base_url,
            timeout_secs,
            search_debounce_ms,
            page_size,
        })
    }

    /// Settings pointing at a given base URL with the stock defaults.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 10,
            search_debounce_ms: 500,
            page_size: 20,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
