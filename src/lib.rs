//! # rdfsniff
//!
//! Format detection and fixture caching for RDF/graph test suites.
//!
//! ## Overview
//!
//! rdfsniff provides:
//! - **Format sniffing**: Guess which graph serialization a byte stream
//!   contains by inspecting a bounded prefix, without parsing it
//! - **Input abstraction**: Classify seekable streams (position is restored
//!   after sampling) or already-materialized text
//! - **Fixture sources**: File-backed and in-memory sources that open fresh,
//!   rewindable streams
//! - **Fixture cache**: An explicitly constructed on-disk cache for externally
//!   fetched test fixtures, keyed by URI
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rdfsniff::{FormatKind, classify_stream};
//! use std::fs::File;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut file = File::open("fixtures/example.ttl")?;
//!     let kind = classify_stream(&mut file)?;
//!     assert_eq!(kind, FormatKind::Notation3);
//!
//!     // The file position is back at the start; hand it to the
//!     // reader matching `kind`.
//!     Ok(())
//! }
//! ```
//!
//! ## Sniffing semantics
//!
//! Classification is a best-effort heuristic, not validation:
//!
//! - At most the first 1000 bytes of a stream are sampled; a pattern that
//!   first occurs beyond that window is not detected. The text path applies
//!   no window.
//! - Patterns are tried in a fixed priority order (markup, then JSON-LD,
//!   then `@prefix`), and the first match wins. Inputs matching nothing,
//!   including the empty input, fall back to [`FormatKind::NTriples`].
//! - Exactly one label is always returned; the only failure mode for the
//!   stream path is an I/O error from the underlying reader.

// Core modules
pub mod cache;
pub mod error;
pub mod format;
pub mod io;
pub mod sniff;

// Re-exports for convenience
pub use cache::FixtureCache;
pub use error::{CacheError, SniffError};
pub use format::FormatKind;
pub use io::{FileSource, FixtureSource, InMemorySource, SeekRead};
pub use sniff::{SNIFF_WINDOW, SniffInput, classify, classify_stream, classify_text};

/// Open a fixture source and classify its contents.
///
/// Each [`FixtureSource::open`] call yields a fresh stream, so this never
/// disturbs any stream the caller already holds.
pub fn classify_source(source: &dyn FixtureSource) -> Result<FormatKind, SniffError> {
    let mut stream = source.open()?;
    classify(SniffInput::Stream(&mut *stream))
}

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
