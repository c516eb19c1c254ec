//! Identity from trusted request fields.
//!
//! A gateway in front of the service has already authenticated the caller and
//! forwards the result as headers and/or query parameters. This crate maps
//! those fields to claims, requires a subject claim, builds an [`Identity`]
//! and lets an optional hook veto or enrich the result.
//!
//! - [`services::auth`]: the engine (framework independent apart from `http` types)
//! - [`middleware::auth::access`]: axum middleware running the engine per request
//! - [`api::v1::extractors`]: `CurrentIdentity` / `MaybeIdentity` for handlers
//!
//! [`Identity`]: services::auth::Identity
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
