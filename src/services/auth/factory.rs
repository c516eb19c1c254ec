/// Factory: build `InternalAuth` from application `AuthSettings`.
use std::sync::Arc;

use crate::config::AuthSettings;
use crate::services::auth::{AuditEvents, AuthOptions, InternalAuth, OptionsError};

pub fn build_internal_auth(settings: &AuthSettings) -> Result<Arc<InternalAuth>, OptionsError> {
    let mut builder = AuthOptions::builder()
        .scheme(settings.scheme.as_str())
        .source(settings.source)
        .delimiter(settings.delimiter.as_str());

    if let Some(mapping) = &settings.subject {
        builder = builder.add_subject_mapping_as(&mapping.field, mapping.claim_type())?;
    }
    if let Some(mapping) = &settings.name {
        builder = builder.add_name_mapping_as(&mapping.field, mapping.claim_type())?;
    }
    if let Some(mapping) = &settings.role {
        builder = builder.add_role_mapping_as(&mapping.field, mapping.claim_type())?;
    }
    for mapping in &settings.claims {
        builder = builder.add_claim_mapping_as(&mapping.field, mapping.claim_type())?;
    }

    if settings.audit {
        let audit = AuditEvents::with_denied_subjects(settings.denied_subjects.iter().cloned());
        builder = builder.events(Arc::new(audit));
    }

    let options = builder.build();
    tracing::info!(
        scheme = options.scheme(),
        source = ?options.source(),
        subject_claim = options.subject_claim_type(),
        mappings = options.mappings().len(),
        hook = options.events().is_some(),
        "internal authentication configured"
    );

    Ok(Arc::new(InternalAuth::new(options)))
}
