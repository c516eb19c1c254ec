/*
 * Responsibility
 * - Hand the authenticated Identity to handlers
 * - The access middleware has already put it into request extensions;
 *   if it is missing the caller is anonymous (or the middleware is not wired)
 */
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::Identity;

/// Requires an identity; rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentIdentity)
            .ok_or_else(|| AppError::unauthorized("no authenticated identity"))
    }
}

/// Never rejects; `None` for anonymous callers.
#[derive(Debug, Clone)]
pub struct MaybeIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::{Claim, ClaimTypes};
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;

    fn make_parts(identity: Option<Identity>) -> Parts {
        let (mut parts, _body) = Request::new(()).into_parts();
        if let Some(identity) = identity {
            parts.extensions.insert(identity);
        }
        parts
    }

    fn identity() -> Identity {
        Identity::try_new(
            "Internal",
            vec![Claim::new("subject", "123")],
            ClaimTypes::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_current_identity_present() {
        let mut parts = make_parts(Some(identity()));
        let CurrentIdentity(id) = CurrentIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(id.subject(), "123");
    }

    #[tokio::test]
    async fn test_current_identity_absent_is_401() {
        let mut parts = make_parts(None);
        let rejection = CurrentIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_maybe_identity() {
        let mut parts = make_parts(None);
        let MaybeIdentity(id) = MaybeIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(id.is_none());

        let mut parts = make_parts(Some(identity()));
        let MaybeIdentity(id) = MaybeIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(id.unwrap().subject(), "123");
    }
}
