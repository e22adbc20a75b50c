//! Mirror lookup service access
//!
//! This module provides:
//! - HTTP client shared foundation (timeout, User-Agent)
//! - Store URL validation
//! - The rg-adguard GetFiles adapter

mod client;
mod rg_adguard;

pub use client::HttpClient;
pub use rg_adguard::{validate_store_url, RgAdguardClient, MIRROR_ENDPOINT, STORE_DOMAIN};

use crate::error::MirrorError;
use async_trait::async_trait;

/// Trait for mirror lookup clients
///
/// Given a storefront URL, a mirror returns an HTML document listing the
/// direct download links for the underlying package files.
#[async_trait]
pub trait MirrorClient: Send + Sync {
    /// Submit the store URL and return the raw HTML listing
    async fn fetch_listing_html(&self, store_url: &str) -> Result<String, MirrorError>;
}
