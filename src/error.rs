// src/error.rs
//! Error taxonomy for a roster run.
//!
//! Row-level errors ([`ImageError`], [`NormalizeError`]) are recovered by the
//! runner and turned into diagnostics. Only [`RunError`] leaves the library.

use std::path::PathBuf;

/// Transport or HTTP status failure for a single GET.
#[derive(Debug, thiserror::Error)]
#[error("GET {url} failed: {reason}")]
pub struct FetchError {
    pub url: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(url: &str, reason: impl std::fmt::Display) -> Self {
        Self { url: s!(url), reason: reason.to_string() }
    }
}

/// Why a profile picture could not be canonicalized.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("unrecognized image data: {0}")]
    Decode(#[source] image::ImageError),

    #[error("image is {width}x{height}, not square")]
    AspectRatio { width: u32, height: u32 },
}

/// The only fatal outcome for a single row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("no name")]
    NameMissing,
}

/// Local filesystem failures (cache directory, cached images, output document).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("i/o on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("serializing records: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Errors that abort a whole run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("fetching roster sheet: {0}")]
    Source(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
