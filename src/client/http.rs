//! HTTP client abstraction for node API requests.

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;

use crate::domain::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Content type of creation request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    /// Request timeout. `None` lets a request wait indefinitely.
    pub timeout: Option<Duration>,
}

impl HttpConfig {
    /// Create config with a custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ClientInit` if the TLS backend cannot be initialised.
    pub fn with_config(config: HttpConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder
            .build()
            .map_err(|e| ApiError::client_init(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner.get(url).header(ACCEPT, "application/json")
    }

    /// Build a POST request carrying an already-encoded form body
    pub fn post_form(&self, url: &str, body: String) -> reqwest::RequestBuilder {
        self.inner
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
    }
}

// ============================================================================
// Tests
// ============================================================================
