//! Format kinds for the recognizable graph serializations.

use serde::{Deserialize, Serialize};

/// Represents the graph serialization formats the sniffer can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    /// RDFa metadata embedded in HTML markup
    RdfaHtml,
    /// JSON-LD linked data
    JsonLd,
    /// Notation3 / Turtle-style compact triple notation
    Notation3,
    /// Line-oriented plain triples (default/fallback format)
    NTriples,
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::RdfaHtml => write!(f, "rdfa-html"),
            FormatKind::JsonLd => write!(f, "json-ld"),
            FormatKind::Notation3 => write!(f, "notation3"),
            FormatKind::NTriples => write!(f, "n-triples"),
        }
    }
}

impl FormatKind {
    /// Parse a format kind from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rdfa-html" | "rdfa" | "html" => Some(FormatKind::RdfaHtml),
            "json-ld" | "jsonld" => Some(FormatKind::JsonLd),
            "notation3" | "n3" | "turtle" | "ttl" => Some(FormatKind::Notation3),
            "n-triples" | "ntriples" | "nt" => Some(FormatKind::NTriples),
            _ => None,
        }
    }

    /// Get file extensions conventionally used for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FormatKind::RdfaHtml => &["html", "xhtml"],
            FormatKind::JsonLd => &["jsonld", "json"],
            FormatKind::Notation3 => &["n3", "ttl"],
            FormatKind::NTriples => &["nt"],
        }
    }

    /// Get the IANA media type for this format.
    pub fn media_type(&self) -> &'static str {
        match self {
            FormatKind::RdfaHtml => "text/html",
            FormatKind::JsonLd => "application/ld+json",
            FormatKind::Notation3 => "text/n3",
            FormatKind::NTriples => "application/n-triples",
        }
    }
}
