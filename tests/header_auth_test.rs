//! Header-sourced authentication through the full router.

mod common;

use axum::http::StatusCode;
use internal_auth::services::auth::{AuthOptions, ClaimSource};

use common::{claim_pairs, get, get_json, pairs, router};

#[tokio::test]
async fn test_header_source_uses_header_value() {
    let options = AuthOptions::builder()
        .source(ClaimSource::Header)
        .add_subject_mapping("UserId")
        .unwrap()
        .build();

    let (status, json) = get_json(
        router(options),
        "/api/v1/me?UserId=456",
        &[("UserId", "123")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["subject"], "123");
    assert_eq!(json["scheme"], "Internal");
}

#[tokio::test]
async fn test_no_fields_is_unauthorized() {
    let (status, json) = get_json(router(AuthOptions::default()), "/api/v1/claims", &[]).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_health_needs_no_identity() {
    let (status, json) = get_json(router(AuthOptions::default()), "/health", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_default_mappings() {
    let (status, json) = get_json(
        router(AuthOptions::default()),
        "/api/v1/me",
        &[("subject", "u1"), ("name", "alice"), ("role", "admin,dev")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["subject"], "u1");
    assert_eq!(json["name"], "alice");
    assert_eq!(json["roles"], serde_json::json!(["admin", "dev"]));
}

#[tokio::test]
async fn test_name_in_header() {
    let options = AuthOptions::builder()
        .add_subject_mapping("UserId")
        .unwrap()
        .add_name_mapping("UserName")
        .unwrap()
        .build();

    let (status, body) = get(
        router(options),
        "/api/v1/name",
        &[("UserId", "123"), ("UserName", "zhangsan")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "zhangsan");
}

#[tokio::test]
async fn test_roles_split_on_delimiter() {
    let options = AuthOptions::builder()
        .add_subject_mapping("UserId")
        .unwrap()
        .add_role_mapping("UserRole")
        .unwrap()
        .build();

    let (status, json) = get_json(
        router(options),
        "/api/v1/claims",
        &[("UserId", "123"), ("UserRole", "admin,dev")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        claim_pairs(&json),
        pairs(&[
            ("UserId", "123"),
            ("UserRole", "admin"),
            ("UserRole", "dev")
        ])
    );
}

#[tokio::test]
async fn test_missing_role_is_forbidden() {
    let options = AuthOptions::builder()
        .add_subject_mapping("UserId")
        .unwrap()
        .add_role_mapping("UserRole")
        .unwrap()
        .build();

    let (status, _) = get(
        router(options),
        "/api/v1/roles/admin",
        &[("UserId", "123"), ("UserRole", "dev")],
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_custom_field_appears_once() {
    let options = AuthOptions::builder()
        .add_subject_mapping("UserId")
        .unwrap()
        .add_claim_mapping("OrgId")
        .unwrap()
        .build();

    let (status, json) = get_json(
        router(options),
        "/api/v1/claims",
        &[("UserId", "123"), ("OrgId", "456")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        claim_pairs(&json),
        pairs(&[("UserId", "123"), ("OrgId", "456")])
    );
}

#[tokio::test]
async fn test_custom_delimiter() {
    let options = AuthOptions::builder()
        .delimiter(";")
        .add_subject_mapping("UserId")
        .unwrap()
        .add_role_mapping("UserRole")
        .unwrap()
        .build();

    let (status, _) = get(
        router(options),
        "/api/v1/roles/admin,dev",
        &[("UserId", "123"), ("UserRole", ";admin;;dev;")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}
