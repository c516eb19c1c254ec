use crate::services::auth::claims::Claim;
use crate::services::auth::options::ClaimTypes;

/// The authenticated caller: an ordered claim set plus well-known accessors.
///
/// - Only constructible when at least one claim carries the subject type
/// - Claims can be added (hook enrichment) but never removed, so that holds for its lifetime
/// - Role checks are exact, case-sensitive matches on the role claim type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    scheme: String,
    claims: Vec<Claim>,
    claim_types: ClaimTypes,
}

impl Identity {
    /// Returns `None` when no claim has `claim_types.subject`.
    pub fn try_new(
        scheme: impl Into<String>,
        claims: Vec<Claim>,
        claim_types: ClaimTypes,
    ) -> Option<Self> {
        if !claims.iter().any(|c| c.claim_type == claim_types.subject) {
            return None;
        }

        Some(Self {
            scheme: scheme.into(),
            claims,
            claim_types,
        })
    }

    /// Name of the authentication scheme that produced this identity.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn claim_types(&self) -> &ClaimTypes {
        &self.claim_types
    }

    /// First subject claim value.
    pub fn subject(&self) -> &str {
        // try_new guarantees a subject claim and nothing removes claims afterwards.
        self.find_first(&self.claim_types.subject).unwrap_or_default()
    }

    pub fn name(&self) -> Option<&str> {
        self.find_first(&self.claim_types.name)
    }

    pub fn roles(&self) -> Vec<&str> {
        self.find_all(&self.claim_types.role)
    }

    pub fn is_in_role(&self, role: &str) -> bool {
        self.claims
            .iter()
            .any(|c| c.claim_type == self.claim_types.role && c.value == role)
    }

    pub fn find_first(&self, claim_type: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|c| c.claim_type == claim_type)
            .map(|c| c.value.as_str())
    }

    pub fn find_all(&self, claim_type: &str) -> Vec<&str> {
        self.claims
            .iter()
            .filter(|c| c.claim_type == claim_type)
            .map(|c| c.value.as_str())
            .collect()
    }

    pub fn has_claim(&self, claim_type: &str, value: &str) -> bool {
        self.claims
            .iter()
            .any(|c| c.claim_type == claim_type && c.value == value)
    }

    pub fn add_claim(&mut self, claim: Claim) {
        self.claims.push(claim);
    }
}
