//! Package file download
//!
//! Downloads go to a flat directory, one file per listing entry, named
//! after the entry's display name. There is no overwrite protection and
//! no cleanup of partial files; a failed run may leave truncated files
//! behind. The SHA-1 column from the listing is never checked.

use crate::domain::PackageEntry;
use crate::error::FetchError;
use crate::mirror::HttpClient;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Default download directory, relative to the working directory
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloads";

/// Trait for fetching a listed package to local storage
#[async_trait]
pub trait PackageFetcher: Send + Sync {
    /// Download the entry and return the path it was stored at
    async fn fetch(&self, entry: &PackageEntry) -> Result<PathBuf, FetchError>;
}

/// Fetcher that GETs the entry URL and writes the body to disk
pub struct HttpFetcher {
    client: HttpClient,
    dir: PathBuf,
}

impl HttpFetcher {
    /// Create a fetcher storing files under the given directory
    pub fn new(client: HttpClient, dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            dir: dir.into(),
        }
    }

    /// Returns the download directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl PackageFetcher for HttpFetcher {
    async fn fetch(&self, entry: &PackageEntry) -> Result<PathBuf, FetchError> {
        fs::create_dir_all(&self.dir).map_err(|e| FetchError::io(self.dir.clone(), e))?;

        let body = self
            .client
            .get_bytes(&entry.url)
            .await
            .map_err(|e| FetchError::http(&entry.name, e))?;

        let path = self.dir.join(&entry.name);
        fs::write(&path, body).map_err(|e| FetchError::io(path.clone(), e))?;

        Ok(path)
    }
}
