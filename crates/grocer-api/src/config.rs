//! Client configuration.

use std::time::Duration;

/// Default base URL for a locally running list API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Connection settings for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API. A trailing slash is tolerated.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ApiConfig {
    /// Config pointing at the given base URL, default timeout.
    pub fn with_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
