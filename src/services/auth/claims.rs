//! Field values -> claims.
use crate::services::auth::fields::RequestFields;
use crate::services::auth::options::{AuthOptions, DEFAULT_DELIMITER};

/// A single typed fact about the caller. Several claims may share a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Claim {
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// Split one raw field value into trimmed, non-empty parts.
///
/// Leading, trailing or doubled delimiters never produce an empty value.
pub fn split_values<'a>(raw: &'a str, delimiter: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let delimiter = if delimiter.is_empty() {
        DEFAULT_DELIMITER
    } else {
        delimiter
    };

    raw.split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Collect claims for every mapping and every active source.
///
/// Order: mapping order, then header before query, then value order.
/// Duplicates are kept.
pub fn extract_claims(options: &AuthOptions, fields: &dyn RequestFields) -> Vec<Claim> {
    let mut claims = Vec::new();

    for mapping in options.mappings() {
        for &source in options.source().sources() {
            for raw in fields.read(&mapping.field_name, source) {
                claims.extend(
                    split_values(raw, options.delimiter())
                        .map(|value| Claim::new(mapping.claim_type.as_str(), value)),
                );
            }
        }
    }

    claims
}
