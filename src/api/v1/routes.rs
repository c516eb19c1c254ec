/*
 * Responsibility
 * - v1 URL structure
 * - Everything here sits behind the access middleware (applied in app.rs)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::identity::{list_claims, me, name, require_roles};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/claims", get(list_claims))
        .route("/me", get(me))
        .route("/name", get(name))
        .route("/roles/{roles}", get(require_roles))
}
