//! Post-authentication hook.
//!
//! The engine calls [`AuthEvents::on_authenticated`] once per attempt,
//! after the identity has been built and before the outcome is returned.
//! The hook can observe the candidate identity, enrich it, or set the final
//! result (`fail`, `forbid`, ...). Errors it returns abort the attempt.
use async_trait::async_trait;

use crate::services::auth::fields::RequestFields;
use crate::services::auth::identity::Identity;
use crate::services::auth::options::AuthOptions;
use crate::services::auth::outcome::AuthOutcome;

#[async_trait]
pub trait AuthEvents: Send + Sync + 'static {
    async fn on_authenticated(&self, ctx: &mut AuthenticatedContext<'_>) -> anyhow::Result<()>;
}

/// What the hook sees: the request, the options, the candidate identity and
/// a result slot. While the hook runs it has the only mutable access.
pub struct AuthenticatedContext<'a> {
    fields: &'a dyn RequestFields,
    options: &'a AuthOptions,
    identity: Identity,
    result: Option<AuthOutcome>,
}

impl<'a> AuthenticatedContext<'a> {
    pub fn new(
        fields: &'a dyn RequestFields,
        options: &'a AuthOptions,
        identity: Identity,
    ) -> Self {
        Self {
            fields,
            options,
            identity,
            result: None,
        }
    }

    pub fn scheme(&self) -> &str {
        self.options.scheme()
    }

    pub fn options(&self) -> &AuthOptions {
        self.options
    }

    pub fn fields(&self) -> &dyn RequestFields {
        self.fields
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    /// Replace the candidate identity, e.g. with one rebuilt from a directory
    /// lookup. `Identity::try_new` keeps the subject requirement.
    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = identity;
    }

    pub fn result(&self) -> Option<&AuthOutcome> {
        self.result.as_ref()
    }

    /// Accept with the (possibly enriched) identity.
    pub fn success(&mut self) {
        self.result = Some(AuthOutcome::Success(self.identity.clone()));
    }

    /// Set any outcome directly, including a `Success` carrying another identity.
    pub fn set_result(&mut self, outcome: AuthOutcome) {
        self.result = Some(outcome);
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        self.result = Some(AuthOutcome::Failure(reason.into()));
    }

    pub fn forbid(&mut self) {
        self.result = Some(AuthOutcome::Forbid);
    }

    pub fn no_result(&mut self) {
        self.result = Some(AuthOutcome::NoResult);
    }

    /// Explicit result if the hook set one, otherwise success with the
    /// identity as the hook left it.
    pub(crate) fn into_outcome(self) -> AuthOutcome {
        match self.result {
            Some(outcome) => outcome,
            None => AuthOutcome::Success(self.identity),
        }
    }
}

impl std::fmt::Debug for AuthenticatedContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedContext")
            .field("scheme", &self.scheme())
            .field("identity", &self.identity)
            .field("result", &self.result)
            .finish()
    }
}
