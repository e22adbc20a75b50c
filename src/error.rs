//! Application error types using thiserror
//!
//! Error hierarchy:
//! - HttpError: transport-level failures shared by mirror and downloads
//! - MirrorError: issues with the mirror lookup service
//! - FetchError: issues while downloading a package file
//! - InstallError: issues while running the install subprocess

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Mirror lookup related errors
    #[error(transparent)]
    Mirror(#[from] MirrorError),

    /// Package download related errors
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Install subprocess related errors
    #[error(transparent)]
    Install(#[from] InstallError),
}

/// Transport-level HTTP failures
#[derive(Error, Debug)]
pub enum HttpError {
    /// Request could not be sent or the connection failed
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// Server answered with a non-success status
    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Response body could not be read
    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

/// Errors from the mirror lookup service
#[derive(Error, Debug)]
pub enum MirrorError {
    /// The operator-supplied URL is not a Microsoft Store link
    #[error("invalid store URL '{url}': expected a microsoft.com link")]
    InvalidStoreUrl { url: String },

    /// The lookup request itself failed
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Errors while downloading a package file
#[derive(Error, Debug)]
pub enum FetchError {
    /// The download request failed (network or status)
    #[error("download of '{name}' failed: {source}")]
    Http {
        name: String,
        #[source]
        source: HttpError,
    },

    /// Directory creation or file write failed
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors while running the install subprocess
#[derive(Error, Debug)]
pub enum InstallError {
    /// The subprocess could not be spawned at all
    #[error("failed to run installer for '{name}': {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The subprocess ran but exited non-zero
    #[error("install of '{name}' failed: {output}")]
    CommandFailed { name: String, output: String },
}

impl HttpError {
    /// Creates a new Network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        HttpError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new Status error
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        HttpError::Status {
            url: url.into(),
            status,
        }
    }

    /// Creates a new Body error
    pub fn body(url: impl Into<String>, message: impl Into<String>) -> Self {
        HttpError::Body {
            url: url.into(),
            message: message.into(),
        }
    }
}

impl MirrorError {
    /// Creates a new InvalidStoreUrl error
    pub fn invalid_store_url(url: impl Into<String>) -> Self {
        MirrorError::InvalidStoreUrl { url: url.into() }
    }
}

impl FetchError {
    /// Creates a new Http error for a named package
    pub fn http(name: impl Into<String>, source: HttpError) -> Self {
        FetchError::Http {
            name: name.into(),
            source,
        }
    }

    /// Creates a new Io error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Io {
            path: path.into(),
            source,
        }
    }
}

impl InstallError {
    /// Creates a new Spawn error
    pub fn spawn(name: impl Into<String>, source: std::io::Error) -> Self {
        InstallError::Spawn {
            name: name.into(),
            source,
        }
    }

    /// Creates a new CommandFailed error
    pub fn command_failed(name: impl Into<String>, output: impl Into<String>) -> Self {
        InstallError::CommandFailed {
            name: name.into(),
            output: output.into(),
        }
    }
}
