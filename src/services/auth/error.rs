use thiserror::Error;

/// Rejected mapping arguments. Raised by the options builder at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("field name must not be empty")]
    EmptyFieldName,
    #[error("claim type must not be empty (field: {field})")]
    EmptyClaimType { field: String },
}

/// Hard failures of an authentication attempt.
///
/// A missing subject is not one of these: it is `AuthOutcome::NoResult`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("on_authenticated hook failed")]
    Hook(#[source] anyhow::Error),
}
