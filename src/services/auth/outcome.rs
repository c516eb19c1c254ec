use crate::services::auth::identity::Identity;

/// Terminal decision of one authentication attempt.
///
/// `NoResult` means "no opinion": other mechanisms may still decide.
/// It is not a denial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    NoResult,
    Success(Identity),
    Failure(String),
    Forbid,
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthOutcome::Success(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn into_identity(self) -> Option<Identity> {
        match self {
            AuthOutcome::Success(identity) => Some(identity),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthOutcome::NoResult => "no_result",
            AuthOutcome::Success(_) => "success",
            AuthOutcome::Failure(_) => "failure",
            AuthOutcome::Forbid => "forbid",
        }
    }
}
