//! store.rg-adguard.net GetFiles adapter
//!
//! The mirror takes a Microsoft Store URL via a form-encoded POST and
//! answers with an HTML page whose table lists direct download links.

use crate::error::MirrorError;
use crate::mirror::{HttpClient, MirrorClient};
use async_trait::async_trait;

/// Mirror lookup endpoint
pub const MIRROR_ENDPOINT: &str = "https://store.rg-adguard.net/api/GetFiles";

/// Substring every acceptable store URL must contain. A coarse filter for
/// obvious operator mistakes, not a security boundary.
pub const STORE_DOMAIN: &str = "microsoft.com";

/// Rejects URLs that are clearly not Microsoft Store links
pub fn validate_store_url(url: &str) -> Result<(), MirrorError> {
    if url.contains(STORE_DOMAIN) {
        Ok(())
    } else {
        Err(MirrorError::invalid_store_url(url))
    }
}

/// Mirror client backed by the rg-adguard GetFiles endpoint
pub struct RgAdguardClient {
    client: HttpClient,
    endpoint: String,
}

impl RgAdguardClient {
    /// Create a new mirror client
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            endpoint: MIRROR_ENDPOINT.to_string(),
        }
    }

    /// Override the endpoint (used by tests pointed at a local server)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns the endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MirrorClient for RgAdguardClient {
    async fn fetch_listing_html(&self, store_url: &str) -> Result<String, MirrorError> {
        let fields = [("type", "url"), ("url", store_url)];
        let body = self.client.post_form(&self.endpoint, &fields).await?;
        Ok(body)
    }
}
