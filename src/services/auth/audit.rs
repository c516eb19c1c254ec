//! Audit hook: logs every authenticated subject, optionally vetoes some.
use std::collections::HashSet;

use async_trait::async_trait;

use crate::services::auth::events::{AuthEvents, AuthenticatedContext};

#[derive(Debug, Clone, Default)]
pub struct AuditEvents {
    denied_subjects: HashSet<String>,
}

impl AuditEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_denied_subjects<I, S>(subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            denied_subjects: subjects.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl AuthEvents for AuditEvents {
    async fn on_authenticated(&self, ctx: &mut AuthenticatedContext<'_>) -> anyhow::Result<()> {
        let identity = ctx.identity();
        let subject = identity.subject().to_string();

        // Header and query may both carry a subject; any denied one vetoes.
        let denied = identity
            .find_all(ctx.options().subject_claim_type())
            .into_iter()
            .find(|s| self.denied_subjects.contains(*s))
            .map(str::to_string);

        if let Some(denied) = denied {
            tracing::warn!(scheme = ctx.scheme(), subject = %denied, "subject denied");
            ctx.forbid();
            return Ok(());
        }

        tracing::info!(
            scheme = ctx.scheme(),
            subject = %subject,
            name = identity.name().unwrap_or_default(),
            roles = ?identity.roles(),
            claims = identity.claims().len(),
            "authenticated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::{AuthOptions, AuthOutcome, InternalAuth, RequestView};
    use axum::http::{HeaderMap, HeaderValue};
    use std::sync::Arc;

    fn auth(events: AuditEvents) -> InternalAuth {
        InternalAuth::new(
            AuthOptions::builder()
                .add_subject_mapping("UserId")
                .unwrap()
                .events(Arc::new(events))
                .build(),
        )
    }

    fn with_user(id: &'static str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert("UserId", HeaderValue::from_static(id));
        map
    }

    #[tokio::test]
    async fn test_audit_passes_through() {
        let auth = auth(AuditEvents::new());
        let map = with_user("123");
        let outcome = auth.authenticate(&RequestView::new(&map, None)).await.unwrap();
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_audit_forbids_denied_subject() {
        let auth = auth(AuditEvents::with_denied_subjects(["mallory"]));

        let map = with_user("mallory");
        let outcome = auth.authenticate(&RequestView::new(&map, None)).await.unwrap();
        assert_eq!(outcome, AuthOutcome::Forbid);

        let map = with_user("alice");
        let outcome = auth.authenticate(&RequestView::new(&map, None)).await.unwrap();
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_audit_checks_every_subject_value() {
        let auth = auth(AuditEvents::with_denied_subjects(["mallory"]));

        let map = with_user("alice");
        let view = RequestView::new(&map, Some("UserId=mallory"));
        let outcome = auth.authenticate(&view).await.unwrap();
        assert_eq!(outcome, AuthOutcome::Forbid);
    }
}
