//! HTTP client for the civic representatives endpoint.

use std::time::Duration;

use url::Url;

use crate::types::{Division, RepresentativesResponse};
use crate::Error;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/civicinfo/v2";

/// HTTP client for the civic representatives endpoint.
///
/// Each request uses a short bounded timeout; callers are expected to treat
/// any failure as "no data" and fall back to local resolution.
pub struct Client {
    base_api_url: String,
    api_key: String,
}

impl Client {
    /// Creates a new client pointing at the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_api_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            api_key: api_key.into(),
        }
    }

    fn representatives_url(&self, zip: &str) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}/representatives", self.base_api_url).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            })?;
        url.query_pairs_mut()
            .append_pair("address", zip)
            .append_pair("levels", "country")
            .append_pair("roles", "legislatorLowerBody")
            .append_pair("key", &self.api_key);
        Ok(url)
    }

    /// Resolves a ZIP code to a congressional district via the provider.
    ///
    /// Returns `Ok(None)` when the response carries no parseable U.S. House
    /// division; request and decode failures surface as [`Error`] so the
    /// caller can apply its fallback policy in one place.
    pub async fn district_for_zip(&self, zip: &str) -> Result<Option<Division>, Error> {
        let url = self.representatives_url(zip)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;

        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to query representatives endpoint: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<RepresentativesResponse>(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(&body));
            Error::RequestFailed
        })?;

        Ok(parsed.house_division())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
