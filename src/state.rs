/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Clone is cheap: the engine sits behind an Arc and is read-only
 */
use std::sync::Arc;

use crate::services::auth::InternalAuth;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<InternalAuth>,
}

impl AppState {
    pub fn new(auth: Arc<InternalAuth>) -> Self {
        Self { auth }
    }
}
