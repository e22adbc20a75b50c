//! HTTP client shared foundation
//!
//! A thin wrapper over reqwest with a configurable timeout and User-Agent.
//! Both the mirror lookup and the package downloads go through it. There
//! is deliberately no retry here: a failed lookup aborts the run and a
//! failed download skips the item.

use crate::error::HttpError;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("storeget/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, HttpError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                HttpError::network("", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Create a client with a custom timeout and the default User-Agent
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Perform a form-encoded POST and return the response body text
    pub async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<String, HttpError> {
        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|e| HttpError::network(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::status(url, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| HttpError::body(url, e.to_string()))
    }

    /// Perform a GET and return the full response body
    ///
    /// Any status other than 200 OK is an error; the body is never read
    /// for non-OK responses.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::network(url, e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(HttpError::status(url, status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::body(url, e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
