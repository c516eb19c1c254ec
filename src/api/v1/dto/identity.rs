/*
 * Responsibility
 * - Response DTOs describing the caller's identity
 */
use serde::Serialize;

use crate::services::auth::{Claim, Identity};

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

impl From<&Claim> for ClaimResponse {
    fn from(c: &Claim) -> Self {
        Self {
            claim_type: c.claim_type.clone(),
            value: c.value.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub scheme: String,
    pub subject: String,
    pub name: Option<String>,
    pub roles: Vec<String>,
}

impl From<&Identity> for IdentityResponse {
    fn from(id: &Identity) -> Self {
        Self {
            scheme: id.scheme().to_string(),
            subject: id.subject().to_string(),
            name: id.name().map(str::to_string),
            roles: id.roles().into_iter().map(str::to_string).collect(),
        }
    }
}
