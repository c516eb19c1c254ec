/*
 * Responsibility
 * - Sample endpoints that read the identity built by the access middleware
 * - Role checks here are the downstream "authorization" consumer of role claims
 */
use axum::{Json, extract::Path, http::StatusCode};

use crate::api::v1::dto::identity::{ClaimResponse, IdentityResponse};
use crate::api::v1::extractors::CurrentIdentity;
use crate::error::AppError;

/// GET /claims: every claim, in identity order.
pub async fn list_claims(CurrentIdentity(identity): CurrentIdentity) -> Json<Vec<ClaimResponse>> {
    Json(identity.claims().iter().map(ClaimResponse::from).collect())
}

/// GET /me
pub async fn me(CurrentIdentity(identity): CurrentIdentity) -> Json<IdentityResponse> {
    Json(IdentityResponse::from(&identity))
}

/// GET /name: display name as plain text, empty when not present.
pub async fn name(CurrentIdentity(identity): CurrentIdentity) -> String {
    identity.name().unwrap_or_default().to_string()
}

/// GET /roles/{roles}: 200 only if the caller holds every comma-separated role.
pub async fn require_roles(
    CurrentIdentity(identity): CurrentIdentity,
    Path(roles): Path<String>,
) -> Result<StatusCode, AppError> {
    let missing = roles
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .find(|r| !identity.is_in_role(r));

    if let Some(role) = missing {
        tracing::debug!(subject = identity.subject(), role, "role check failed");
        return Err(AppError::Forbidden);
    }

    Ok(StatusCode::OK)
}
