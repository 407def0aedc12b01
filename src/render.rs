//! Text serialization of the assembled document.
//!
//! The format selector is a closed enum: the only way to name a format this
//! crate does not support is through `Format::from_str`, which fails fast
//! with `Error::UnsupportedFormat` before any output exists. `render`'s own
//! match is exhaustive, mirroring the lowering's total-function discipline.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::schema::Document;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Indented (two-space) JSON text.
    Json,
    /// Block-style YAML text, structurally equivalent to the JSON output.
    Yaml,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector {
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Yaml => f.write_str("yaml"),
        }
    }
}

/// Render a document as text in the selected format. Output is materialized
/// fully in memory; key order follows the document's own field order.
pub fn render(document: &Document, format: Format) -> Result<String, Error> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(document)?),
        Format::Yaml => Ok(serde_yaml::to_string(document)?),
    }
}
