//! Error types for sniffing and fixture caching.
//!
//! This module provides:
//! - `SniffError`: Errors surfaced while classifying an input
//! - `CacheError`: Errors surfaced by the on-disk fixture cache

use thiserror::Error;

/// Errors that can occur while classifying an input.
///
/// Classification itself never fails; only rewinding or sampling the
/// underlying stream can.
#[derive(Debug, Error)]
pub enum SniffError {
    /// I/O error while rewinding or sampling the stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during fixture cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// I/O error touching the cache directory or a content file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cache index could not be read or written
    #[error("cache index error: {0}")]
    Index(#[from] serde_json::Error),

    /// The caller-supplied fetch closure failed; nothing was stored
    #[error("fetch for '{uri}' failed: {source}")]
    Fetch {
        /// URI whose fetch failed
        uri: String,
        /// The underlying fetch error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
