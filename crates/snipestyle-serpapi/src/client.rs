//! HTTP client for the SerpAPI `search.json` endpoint.
//!
//! Wraps `reqwest` with API key management and typed response
//! deserialization. One GET per query; no retries, caching or paging.

use std::time::Duration;

use reqwest::{Client, Url};
use snipestyle_core::config::{DEFAULT_SERPAPI_BASE_URL, DEFAULT_SERPAPI_ENGINE, DEFAULT_USER_AGENT};
use snipestyle_core::{AppConfig, ResultRecord};

use crate::error::SerpApiError;
use crate::types::{QueryOutcome, ShoppingResponse};

/// Client for the SerpAPI shopping search.
///
/// Use [`SerpApiClient::from_config`] in the binary or
/// [`SerpApiClient::with_base_url`] to point at a mock server in tests.
pub struct SerpApiClient {
    client: Client,
    api_key: String,
    engine: String,
    base_url: Url,
}

impl SerpApiClient {
    /// Creates a client pointed at the production endpoint with default
    /// engine and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`SerpApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str) -> Result<Self, SerpApiError> {
        Self::with_base_url(api_key, DEFAULT_SERPAPI_BASE_URL)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SerpApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SerpApiError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, SerpApiError> {
        Self::build(api_key, DEFAULT_SERPAPI_ENGINE, base_url, None, DEFAULT_USER_AGENT)
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`SerpApiClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SerpApiError> {
        Self::build(
            &config.serpapi_api_key,
            &config.serpapi_engine,
            &config.serpapi_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    fn build(
        api_key: &str,
        engine: &str,
        base_url: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, SerpApiError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let base_url = Url::parse(base_url).map_err(|e| SerpApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            engine: engine.to_owned(),
            base_url,
        })
    }

    /// Runs one shopping search and returns the listings in API order.
    ///
    /// A 2xx body without `shopping_results` (or with `null`) yields an
    /// empty list; entries that are not objects are skipped.
    ///
    /// # Errors
    ///
    /// - [`SerpApiError::Http`] on network failure.
    /// - [`SerpApiError::Status`] on a non-2xx HTTP status.
    /// - [`SerpApiError::Deserialize`] if the body is not the expected JSON.
    pub async fn search_shopping(&self, query: &str) -> Result<Vec<ResultRecord>, SerpApiError> {
        let url = self.build_url(query);
        tracing::debug!(query, engine = %self.engine, "requesting shopping results");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SerpApiError::Http(e.without_url()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SerpApiError::Http(e.without_url()))?;

        if !status.is_success() {
            return Err(SerpApiError::Status {
                status: status.as_u16(),
                message: Self::error_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_owned()),
            });
        }

        let parsed: ShoppingResponse =
            serde_json::from_str(&body).map_err(|e| SerpApiError::Deserialize {
                context: format!("shopping search for '{query}'"),
                source: e,
            })?;

        if parsed.shopping_results.is_empty() {
            if let Some(note) = &parsed.error {
                tracing::debug!(query, note = %note, "search returned no shopping results");
            }
        }

        tracing::debug!(query, count = parsed.shopping_results.len(), "received shopping results");
        Ok(parsed.shopping_results)
    }

    /// Fetches one query without ever failing.
    ///
    /// Any error becomes an empty record list plus a message naming the
    /// query, so one bad request never aborts a batch.
    pub async fn fetch_query(&self, query: &str) -> QueryOutcome {
        match self.search_shopping(query).await {
            Ok(records) => QueryOutcome {
                query: query.to_owned(),
                records,
                error: None,
            },
            Err(e) => {
                tracing::warn!(query, error = %e, "shopping search failed, continuing with no results");
                QueryOutcome {
                    query: query.to_owned(),
                    records: Vec::new(),
                    error: Some(format!("Error fetching data for '{query}': {e}")),
                }
            }
        }
    }

    /// Builds the request URL with percent-encoded `engine`, `q` and
    /// `api_key` parameters.
    fn build_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("engine", &self.engine)
            .append_pair("q", query)
            .append_pair("api_key", &self.api_key);
        url
    }

    /// Pulls the top-level `"error"` string out of an error body, if any.
    fn error_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("error")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
