//! Which parts of a request the extractor reads fields from.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single place a field value can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSource {
    Header,
    Query,
}

impl fmt::Display for FieldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSource::Header => f.write_str("header"),
            FieldSource::Query => f.write_str("query"),
        }
    }
}

/// Configured set of sources consulted for every mapping.
///
/// Closed set instead of a bit mask: "is this source active?" goes through
/// [`ClaimSource::includes`], never through numeric flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimSource {
    Header,
    Query,
    #[default]
    HeaderAndQuery,
}

impl ClaimSource {
    /// Active sources in extraction order (header first).
    pub fn sources(self) -> &'static [FieldSource] {
        match self {
            ClaimSource::Header => &[FieldSource::Header],
            ClaimSource::Query => &[FieldSource::Query],
            ClaimSource::HeaderAndQuery => &[FieldSource::Header, FieldSource::Query],
        }
    }

    pub fn includes(self, source: FieldSource) -> bool {
        self.sources().contains(&source)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown claim source: {0}")]
pub struct ParseClaimSourceError(String);

impl FromStr for ClaimSource {
    type Err = ParseClaimSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "header" => Ok(Self::Header),
            "query" => Ok(Self::Query),
            "header_and_query" | "headerandquery" | "both" => Ok(Self::HeaderAndQuery),
            _ => Err(ParseClaimSourceError(s.to_string())),
        }
    }
}
