/*
 * Responsibility
 * - Read raw field values from the current request (headers / query)
 * - Keep the engine free of axum types: it only sees `RequestFields`
 */
use axum::http::HeaderMap;

use crate::services::auth::source::FieldSource;

/// Read-only view of the fields carried by one request.
///
/// Absence is never an error: a missing field yields an empty Vec.
pub trait RequestFields: Send + Sync {
    fn read(&self, field: &str, source: FieldSource) -> Vec<&str>;
}

/// `RequestFields` over an HTTP header map and a raw query string.
#[derive(Debug)]
pub struct RequestView<'a> {
    headers: &'a HeaderMap,
    query: Vec<(String, String)>,
}

impl<'a> RequestView<'a> {
    /// `query` is the raw (still percent-encoded) query string, without `?`.
    pub fn new(headers: &'a HeaderMap, query: Option<&str>) -> Self {
        let query = query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Self { headers, query }
    }

    fn header_values(&self, field: &str) -> Vec<&str> {
        // HeaderMap lookups are case-insensitive; an invalid name simply matches nothing.
        self.headers
            .get_all(field)
            .iter()
            .filter_map(|v| match std::str::from_utf8(v.as_bytes()) {
                Ok(s) => Some(s),
                Err(_) => {
                    tracing::debug!(field, "skipping non-utf8 header value");
                    None
                }
            })
            .collect()
    }

    fn query_values(&self, field: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(field))
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

impl RequestFields for RequestView<'_> {
    fn read(&self, field: &str, source: FieldSource) -> Vec<&str> {
        match source {
            FieldSource::Header => self.header_values(field),
            FieldSource::Query => self.query_values(field),
        }
    }
}
