/*
 * Responsibility
 * - Run one authentication attempt: extract -> require subject -> build identity -> hook
 * - Return a structured outcome; HTTP status mapping belongs to the middleware
 */
use crate::services::auth::claims::{self, Claim};
use crate::services::auth::error::AuthError;
use crate::services::auth::events::AuthenticatedContext;
use crate::services::auth::fields::RequestFields;
use crate::services::auth::identity::Identity;
use crate::services::auth::options::AuthOptions;
use crate::services::auth::outcome::AuthOutcome;

/// Identity-from-fields authentication engine.
///
/// Holds read-only options; share it as `Arc<InternalAuth>` across requests.
#[derive(Debug)]
pub struct InternalAuth {
    options: AuthOptions,
}

impl InternalAuth {
    pub fn new(options: AuthOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AuthOptions {
        &self.options
    }

    pub fn scheme(&self) -> &str {
        self.options.scheme()
    }

    pub fn extract_claims(&self, fields: &dyn RequestFields) -> Vec<Claim> {
        claims::extract_claims(&self.options, fields)
    }

    /// - `Ok(NoResult)` when no subject claim was found
    /// - `Ok(outcome)` set by the hook, or `Ok(Success)` by default
    /// - `Err(AuthError::Hook)` when the hook fails
    pub async fn authenticate(
        &self,
        fields: &dyn RequestFields,
    ) -> Result<AuthOutcome, AuthError> {
        let claims = self.extract_claims(fields);

        let Some(identity) =
            Identity::try_new(self.scheme(), claims, self.options.claim_types().clone())
        else {
            tracing::debug!(
                scheme = self.scheme(),
                subject_claim = self.options.subject_claim_type(),
                "no subject claim found"
            );
            return Ok(AuthOutcome::NoResult);
        };

        let Some(events) = self.options.events() else {
            return Ok(AuthOutcome::Success(identity));
        };

        let mut ctx = AuthenticatedContext::new(fields, &self.options, identity);
        events
            .on_authenticated(&mut ctx)
            .await
            .map_err(AuthError::Hook)?;

        let outcome = ctx.into_outcome();
        if !outcome.is_success() {
            tracing::debug!(
                scheme = self.scheme(),
                outcome = outcome.kind(),
                "on_authenticated overrode the result"
            );
        }

        Ok(outcome)
    }
}
