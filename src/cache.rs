//! On-disk cache for externally fetched test fixtures.
//!
//! The cache is an explicitly constructed object owning one directory; there
//! is no process-wide state. Payloads live in content files, and a JSON index
//! (`index.json`) maps each URI to its file. The index is rewritten on every
//! mutation, so a re-opened cache sees everything a previous one stored.
//!
//! There is no eviction: fixtures are small and test suites want them stable
//! across runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

const INDEX_FILE: &str = "index.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    /// Content file name, relative to the cache root
    file: String,
    /// Payload length in bytes
    len: u64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheIndex {
    /// Next content file id; never reused, even after removals
    next_id: u64,
    entries: BTreeMap<String, CacheEntry>,
}

/// On-disk cache of fetched fixtures, keyed by URI.
#[derive(Debug)]
pub struct FixtureCache {
    root: PathBuf,
    index: CacheIndex,
}

impl FixtureCache {
    /// Open a cache rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let root = dir.into();
        fs::create_dir_all(&root)?;
        let index_path = root.join(INDEX_FILE);
        let index = if index_path.exists() {
            serde_json::from_slice(&fs::read(&index_path)?)?
        } else {
            CacheIndex::default()
        };
        Ok(Self { root, index })
    }

    /// Get the cache directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the number of cached fixtures.
    pub fn len(&self) -> usize {
        self.index.entries.len()
    }

    /// Check if the cache holds no fixtures.
    pub fn is_empty(&self) -> bool {
        self.index.entries.is_empty()
    }

    /// Check if `uri` has a cached payload.
    pub fn contains(&self, uri: &str) -> bool {
        self.index.entries.contains_key(uri)
    }

    /// Load the cached bytes for `uri`, if present.
    pub fn load(&self, uri: &str) -> Result<Option<Vec<u8>>, CacheError> {
        match self.index.entries.get(uri) {
            Some(entry) => Ok(Some(fs::read(self.root.join(&entry.file))?)),
            None => Ok(None),
        }
    }

    /// Store bytes for `uri`, replacing any previous payload.
    pub fn store(&mut self, uri: &str, bytes: &[u8]) -> Result<(), CacheError> {
        let file = match self.index.entries.get(uri) {
            // Reuse the existing content file on overwrite
            Some(entry) => entry.file.clone(),
            None => {
                let id = self.index.next_id;
                self.index.next_id += 1;
                format!("fixture-{id:04}.dat")
            }
        };
        fs::write(self.root.join(&file), bytes)?;
        self.index.entries.insert(
            uri.to_string(),
            CacheEntry {
                file,
                len: bytes.len() as u64,
            },
        );
        self.write_index()
    }

    /// Remove the entry for `uri`. Returns `true` when an entry existed.
    pub fn remove(&mut self, uri: &str) -> Result<bool, CacheError> {
        match self.index.entries.remove(uri) {
            Some(entry) => {
                let path = self.root.join(&entry.file);
                if path.exists() {
                    fs::remove_file(path)?;
                }
                self.write_index()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Return the cached bytes for `uri`, fetching and storing them on a miss.
    ///
    /// The fetch closure runs only on a miss. If it fails, the error is
    /// surfaced as [`CacheError::Fetch`] and the cache is left unchanged.
    pub fn get_or_fetch_with<F>(&mut self, uri: &str, fetch: F) -> Result<Vec<u8>, CacheError>
    where
        F: FnOnce() -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>,
    {
        if let Some(bytes) = self.load(uri)? {
            return Ok(bytes);
        }
        let bytes = fetch().map_err(|source| CacheError::Fetch {
            uri: uri.to_string(),
            source,
        })?;
        self.store(uri, &bytes)?;
        Ok(bytes)
    }

    fn write_index(&self) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec_pretty(&self.index)?;
        fs::write(self.root.join(INDEX_FILE), bytes)?;
        Ok(())
    }
}
