//! Claim mapping table and the immutable options the engine runs on.
//!
//! Options are assembled once at startup through [`AuthOptionsBuilder`] and
//! never change afterwards; the engine only ever holds a shared reference.
use std::fmt;
use std::sync::Arc;

use crate::services::auth::error::OptionsError;
use crate::services::auth::events::AuthEvents;
use crate::services::auth::source::ClaimSource;

pub const DEFAULT_SCHEME: &str = "Internal";
pub const DEFAULT_DELIMITER: &str = ",";

pub const DEFAULT_SUBJECT_CLAIM: &str = "subject";
pub const DEFAULT_NAME_CLAIM: &str = "name";
pub const DEFAULT_ROLE_CLAIM: &str = "role";

/// One `field name -> claim type` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimMapping {
    pub field_name: String,
    pub claim_type: String,
}

/// Claim types the identity uses for its well-known accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimTypes {
    pub subject: String,
    pub name: String,
    pub role: String,
}

impl Default for ClaimTypes {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT_CLAIM.to_string(),
            name: DEFAULT_NAME_CLAIM.to_string(),
            role: DEFAULT_ROLE_CLAIM.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AuthOptions {
    scheme: String,
    source: ClaimSource,
    delimiter: String,
    mappings: Vec<ClaimMapping>,
    claim_types: ClaimTypes,
    events: Option<Arc<dyn AuthEvents>>,
}

impl AuthOptions {
    pub fn builder() -> AuthOptionsBuilder {
        AuthOptionsBuilder::new()
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn source(&self) -> ClaimSource {
        self.source
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Mappings in the order they were added (defaults first).
    pub fn mappings(&self) -> &[ClaimMapping] {
        &self.mappings
    }

    pub fn claim_types(&self) -> &ClaimTypes {
        &self.claim_types
    }

    pub fn subject_claim_type(&self) -> &str {
        &self.claim_types.subject
    }

    pub fn name_claim_type(&self) -> &str {
        &self.claim_types.name
    }

    pub fn role_claim_type(&self) -> &str {
        &self.claim_types.role
    }

    pub fn events(&self) -> Option<&Arc<dyn AuthEvents>> {
        self.events.as_ref()
    }
}

impl Default for AuthOptions {
    fn default() -> Self {
        AuthOptionsBuilder::new().build()
    }
}

impl fmt::Debug for AuthOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthOptions")
            .field("scheme", &self.scheme)
            .field("source", &self.source)
            .field("delimiter", &self.delimiter)
            .field("mappings", &self.mappings)
            .field("claim_types", &self.claim_types)
            .field("events", &self.events.is_some())
            .finish()
    }
}

/// Builder for [`AuthOptions`].
///
/// Starts out with `subject -> subject`, `name -> name` and `role -> role`.
/// Every `add_*` call validates its arguments right away, so a bad mapping
/// fails at startup instead of on the first request.
///
/// ```ignore
/// let options = AuthOptions::builder()
///     .source(ClaimSource::Header)
///     .add_subject_mapping("UserId")?
///     .add_role_mapping("UserRole")?
///     .build();
/// ```
#[derive(Clone)]
pub struct AuthOptionsBuilder {
    scheme: String,
    source: ClaimSource,
    delimiter: String,
    mappings: Vec<ClaimMapping>,
    claim_types: ClaimTypes,
    events: Option<Arc<dyn AuthEvents>>,
}

impl Default for AuthOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthOptionsBuilder {
    pub fn new() -> Self {
        let claim_types = ClaimTypes::default();
        let mappings = [&claim_types.subject, &claim_types.name, &claim_types.role]
            .into_iter()
            .map(|t| ClaimMapping {
                field_name: t.clone(),
                claim_type: t.clone(),
            })
            .collect();

        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            source: ClaimSource::default(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            mappings,
            claim_types,
            events: None,
        }
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        let scheme = scheme.into();
        if !scheme.trim().is_empty() {
            self.scheme = scheme;
        }
        self
    }

    pub fn source(mut self, source: ClaimSource) -> Self {
        self.source = source;
        self
    }

    /// An empty delimiter falls back to `,`.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        self.delimiter = if delimiter.is_empty() {
            DEFAULT_DELIMITER.to_string()
        } else {
            delimiter
        };
        self
    }

    pub fn events(mut self, events: Arc<dyn AuthEvents>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn add_subject_mapping(self, field_name: &str) -> Result<Self, OptionsError> {
        self.add_subject_mapping_as(field_name, field_name)
    }

    pub fn add_subject_mapping_as(
        mut self,
        field_name: &str,
        claim_type: &str,
    ) -> Result<Self, OptionsError> {
        let mapping = validate(field_name, claim_type)?;
        self.claim_types.subject = mapping.claim_type.clone();
        self.push(mapping);
        Ok(self)
    }

    pub fn add_name_mapping(self, field_name: &str) -> Result<Self, OptionsError> {
        self.add_name_mapping_as(field_name, field_name)
    }

    pub fn add_name_mapping_as(
        mut self,
        field_name: &str,
        claim_type: &str,
    ) -> Result<Self, OptionsError> {
        let mapping = validate(field_name, claim_type)?;
        self.claim_types.name = mapping.claim_type.clone();
        self.push(mapping);
        Ok(self)
    }

    pub fn add_role_mapping(self, field_name: &str) -> Result<Self, OptionsError> {
        self.add_role_mapping_as(field_name, field_name)
    }

    pub fn add_role_mapping_as(
        mut self,
        field_name: &str,
        claim_type: &str,
    ) -> Result<Self, OptionsError> {
        let mapping = validate(field_name, claim_type)?;
        self.claim_types.role = mapping.claim_type.clone();
        self.push(mapping);
        Ok(self)
    }

    pub fn add_claim_mapping(self, field_name: &str) -> Result<Self, OptionsError> {
        self.add_claim_mapping_as(field_name, field_name)
    }

    pub fn add_claim_mapping_as(
        mut self,
        field_name: &str,
        claim_type: &str,
    ) -> Result<Self, OptionsError> {
        let mapping = validate(field_name, claim_type)?;
        self.push(mapping);
        Ok(self)
    }

    pub fn build(self) -> AuthOptions {
        AuthOptions {
            scheme: self.scheme,
            source: self.source,
            delimiter: self.delimiter,
            mappings: self.mappings,
            claim_types: self.claim_types,
            events: self.events,
        }
    }

    // Identical pairs are stored once; differing claim types for one field are all kept.
    fn push(&mut self, mapping: ClaimMapping) {
        if !self.mappings.contains(&mapping) {
            self.mappings.push(mapping);
        }
    }
}

fn validate(field_name: &str, claim_type: &str) -> Result<ClaimMapping, OptionsError> {
    if field_name.trim().is_empty() {
        return Err(OptionsError::EmptyFieldName);
    }
    if claim_type.trim().is_empty() {
        return Err(OptionsError::EmptyClaimType {
            field: field_name.to_string(),
        });
    }

    Ok(ClaimMapping {
        field_name: field_name.to_string(),
        claim_type: claim_type.to_string(),
    })
}
