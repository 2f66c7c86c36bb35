use thiserror::Error;

/// Errors returned by the SerpAPI search client.
#[derive(Debug, Error)]
pub enum SerpApiError {
    /// Network or TLS failure from the underlying HTTP client.
    ///
    /// The request URL is stripped before wrapping because it carries the
    /// API key.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `message` is SerpAPI's `"error"` field when the
    /// body carried one.
    #[error("SerpAPI returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
