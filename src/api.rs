//! REST Countries API client.
//!
//! One outbound operation matters: fetching the full country list. The
//! client also knows how to build the by-name endpoint URL with the common
//! name percent-encoded, which the detail screen surfaces as the navigation
//! contract for external consumers.

use std::time::Duration;

use reqwest::Client;

use crate::error::{classify_reqwest_error, LoadError};
use crate::models::Country;

pub const COUNTRIES_BASE_URL: &str = "https://restcountries.com";

/// Per-request timeout. The original behavior had none; a bounded wait is a
/// non-breaking improvement for an interactive client.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Client for the REST Countries API.
#[derive(Debug, Clone)]
pub struct CountriesClient {
    /// Base URL for the API
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl CountriesClient {
    /// Create a new CountriesClient against the public endpoint.
    pub fn new() -> Self {
        Self::with_base_url(COUNTRIES_BASE_URL.to_string())
    }

    /// Create a new CountriesClient with a custom base URL (tests point this
    /// at a mock server).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Fetch the full country dataset.
    ///
    /// Issues one `GET {base}/v3.1/all` and parses the JSON array. Any
    /// failure — connection, timeout, non-success status, malformed body —
    /// maps into [`LoadError`].
    pub async fn fetch_all(&self) -> Result<Vec<Country>, LoadError> {
        let url = format!("{}/v3.1/all", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url, FETCH_TIMEOUT_SECS))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LoadError::HttpStatus { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_reqwest_error(&e, &url, FETCH_TIMEOUT_SECS))?;

        let countries: Vec<Country> = serde_json::from_str(&body)?;
        Ok(countries)
    }

    /// Build the by-name endpoint URL for a single country, with the common
    /// name percent-encoded for use as a path segment.
    pub fn country_url(&self, common_name: &str) -> String {
        format!(
            "{}/v3.1/name/{}?fullText=true",
            self.base_url,
            urlencoding::encode(common_name)
        )
    }
}

impl Default for CountriesClient {
    fn default() -> Self {
        Self::new()
    }
}
