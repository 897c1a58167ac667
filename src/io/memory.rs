//! In-memory fixture source for testing.

use std::io::{self, Cursor};
use std::sync::Arc;

use super::{FixtureSource, SeekRead};

/// In-memory fixture source.
///
/// Cloning is cheap; the backing buffer is shared.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<Vec<u8>>,
}

impl InMemorySource {
    /// Create a new in-memory source with the given data.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }

    /// Create a new in-memory source from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }

    /// Get the backing bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl FixtureSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn SeekRead + Send>> {
        // Each open gets its own cursor over a copy of the buffer, so
        // concurrent streams never share a position.
        Ok(Box::new(Cursor::new(self.data.as_ref().clone())))
    }
}
