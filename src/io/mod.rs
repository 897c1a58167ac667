//! I/O abstractions for fixture sources.
//!
//! This module provides:
//! - `FixtureSource`: Trait for sources of fixture data
//! - `FileSource`: File-backed implementation
//! - `InMemorySource`: In-memory implementation for testing
//!
//! Sources open *seekable* streams: the sniffer samples a bounded prefix and
//! rewinds, so every stream it touches must support reset-to-start.

mod file;
mod memory;
mod source;

pub use file::FileSource;
pub use memory::InMemorySource;
pub use source::{FixtureSource, SeekRead};
