//! Field-based authentication -> Identity in request extensions.
//!
//! Runs the engine on every request under the wrapped router:
//! - `Success`: the `Identity` is inserted into extensions and the request continues
//! - `NoResult`: the request continues anonymously; extractors decide if that is acceptable
//! - `Failure`: 401
//! - `Forbid`: 403
//! - hook error: 500

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{AuthOutcome, RequestView};
use crate::state::AppState;

/// Apply the authentication middleware to every route of `router`.
///
/// Example:
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::access::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 from_fn cannot take a State extractor, so the state is passed explicitly
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let outcome = {
        let view = RequestView::new(req.headers(), req.uri().query());
        state.auth.authenticate(&view).await
    };

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(
                error = ?err,
                scheme = state.auth.scheme(),
                "authentication hook failed"
            );
            return Err(err.into());
        }
    };

    match outcome {
        AuthOutcome::Success(identity) => {
            tracing::debug!(subject = identity.subject(), "request authenticated");
            // middleware -> extractor hand-off
            req.extensions_mut().insert(identity);
        }
        AuthOutcome::NoResult => {}
        AuthOutcome::Failure(reason) => {
            tracing::warn!(reason = %reason, "authentication failed");
            return Err(AppError::Unauthorized(reason));
        }
        AuthOutcome::Forbid => {
            tracing::warn!("authentication forbidden");
            return Err(AppError::Forbidden);
        }
    }

    Ok(next.run(req).await)
}
