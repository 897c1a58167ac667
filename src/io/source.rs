//! Fixture source trait definition.

use std::fmt::Debug;
use std::io::{Read, Seek};

/// A readable, rewindable stream.
///
/// Blanket-implemented for anything that is both `Read` and `Seek`, such as
/// `std::fs::File` and `std::io::Cursor`.
pub trait SeekRead: Read + Seek {}

impl<T: Read + Seek> SeekRead for T {}

/// Trait for fixture input sources.
///
/// Implementors provide a way to open a rewindable stream over fixture data,
/// such as files or in-memory buffers. Non-seekable sources (stdin, sockets)
/// are intentionally not representable here; materialize those to text and
/// classify the string instead.
pub trait FixtureSource: Send + Sync + Debug {
    /// Returns a unique identifier for this source.
    ///
    /// This is used for error messages and logging.
    fn id(&self) -> &str;

    /// Open and return a fresh stream positioned at the beginning.
    fn open(&self) -> std::io::Result<Box<dyn SeekRead + Send>>;
}
