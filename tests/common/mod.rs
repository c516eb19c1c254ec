#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use internal_auth::app::build_router;
use internal_auth::services::auth::{AuthOptions, InternalAuth};
use internal_auth::state::AppState;
use tower::ServiceExt;

pub fn router(options: AuthOptions) -> Router {
    build_router(AppState::new(Arc::new(InternalAuth::new(options))))
}

/// Send a GET and return status + body text.
pub async fn get(router: Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, String) {
    let mut builder = Request::get(uri);
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }
    let req = builder.body(Body::empty()).unwrap();

    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(
    router: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(router, uri, headers).await;
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// `[(type, value), ...]` from a /api/v1/claims body.
pub fn claim_pairs(json: &serde_json::Value) -> Vec<(String, String)> {
    json.as_array()
        .expect("claims should be an array")
        .iter()
        .map(|c| {
            (
                c["type"].as_str().unwrap().to_string(),
                c["value"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(t, v)| (t.to_string(), v.to_string()))
        .collect()
}
