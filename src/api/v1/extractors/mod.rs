/*
 * Responsibility
 * - Request extractors shared by v1 handlers
 */
mod identity;

pub use identity::{CurrentIdentity, MaybeIdentity};
