pub mod audit;
pub mod claims;
pub mod error;
pub mod events;
pub mod factory;
pub mod fields;
pub mod handler;
pub mod identity;
pub mod options;
pub mod outcome;
pub mod source;

pub use audit::AuditEvents;
pub use claims::{Claim, extract_claims, split_values};
pub use error::{AuthError, OptionsError};
pub use events::{AuthEvents, AuthenticatedContext};
pub use factory::build_internal_auth;
pub use fields::{RequestFields, RequestView};
pub use handler::InternalAuth;
pub use identity::Identity;
pub use options::{AuthOptions, AuthOptionsBuilder, ClaimMapping, ClaimTypes};
pub use outcome::AuthOutcome;
pub use source::{ClaimSource, FieldSource};
