//! Heuristic format detection over a bounded input prefix.
//!
//! This is sniffing, not parsing: a small sample of the input is matched
//! against a fixed priority list of patterns, and the first hit names the
//! format. Nothing is validated.

use std::io::{self, Read, Seek, SeekFrom};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::SniffError;
use crate::format::FormatKind;
use crate::io::SeekRead;

/// Maximum number of bytes sampled from a stream before matching.
///
/// Patterns occurring entirely beyond this window are not detected. The
/// materialized-text path applies no window.
pub const SNIFF_WINDOW: usize = 1000;

// Priority order matters: markup before JSON-LD before @prefix. An HTML
// document can embed JSON-LD script blocks and a JSON-LD document can hold
// an "@prefix" key, so the more specific pattern is tried first.
static HTML_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<html").expect("pattern compiles"));
static JSON_LD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\{\s*"@"#).expect("pattern compiles"));
static PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@prefix").expect("pattern compiles"));

/// The two input capabilities the sniffer accepts.
pub enum SniffInput<'a> {
    /// A seekable stream. At most [`SNIFF_WINDOW`] bytes are sampled and the
    /// position is restored to the start before returning.
    Stream(&'a mut dyn SeekRead),
    /// An already-materialized text value. No length bound is applied.
    Text(&'a str),
}

/// Classify an input as one of the four known graph serialization formats.
pub fn classify(input: SniffInput<'_>) -> Result<FormatKind, SniffError> {
    match input {
        SniffInput::Stream(stream) => {
            let window = sample_window(stream)?;
            Ok(classify_text(&window))
        }
        SniffInput::Text(text) => Ok(classify_text(text)),
    }
}

/// Classify an already-materialized text value.
///
/// First match wins: `<html` names [`FormatKind::RdfaHtml`], a `{` followed
/// by optional whitespace and `"@` names [`FormatKind::JsonLd`], `@prefix`
/// names [`FormatKind::Notation3`], and anything else, including the empty
/// string, falls back to [`FormatKind::NTriples`].
pub fn classify_text(text: &str) -> FormatKind {
    if HTML_PATTERN.is_match(text) {
        FormatKind::RdfaHtml
    } else if JSON_LD_PATTERN.is_match(text) {
        FormatKind::JsonLd
    } else if PREFIX_PATTERN.is_match(text) {
        FormatKind::Notation3
    } else {
        FormatKind::NTriples
    }
}

/// Classify a seekable stream by sampling its first [`SNIFF_WINDOW`] bytes.
///
/// The stream is rewound before and after sampling, so the caller's next
/// read observes the full, unconsumed stream regardless of the position it
/// held on entry.
pub fn classify_stream<R: SeekRead>(stream: &mut R) -> Result<FormatKind, SniffError> {
    let window = sample_window(stream)?;
    Ok(classify_text(&window))
}

/// Rewind, read up to [`SNIFF_WINDOW`] bytes, rewind again.
///
/// Non-UTF-8 bytes in the sample are replaced lossily; they can never match
/// a pattern, which is the behavior we want for binary junk.
fn sample_window(stream: &mut dyn SeekRead) -> io::Result<String> {
    stream.seek(SeekFrom::Start(0))?;
    let mut window = vec![0u8; SNIFF_WINDOW];
    let mut filled = 0;
    while filled < SNIFF_WINDOW {
        let n = stream.read(&mut window[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    window.truncate(filled);
    stream.seek(SeekFrom::Start(0))?;
    Ok(String::from_utf8_lossy(&window).into_owned())
}
