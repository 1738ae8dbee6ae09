// tests/http_api_tests.rs
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use std::sync::Arc;
use stocktrail::application::ports::identity::IdentityOutcome;
use stocktrail::presentation::http::{routes::build_router, state::HttpState};
use tower::util::ServiceExt as _;

mod support;
use support::{MockAuditRepo, MockProductRepo, StubIdentity, make_services};

fn make_router(identity_outcome: IdentityOutcome) -> Router {
    let services = Arc::new(make_services(
        Arc::new(MockAuditRepo {
            types: vec![
                stocktrail::domain::audit::AuditTypeRecord {
                    audit_type_id: 1,
                    name: "Register".into(),
                },
                stocktrail::domain::audit::AuditTypeRecord {
                    audit_type_id: 2,
                    name: "Login".into(),
                },
            ],
            ..Default::default()
        }),
        Arc::new(MockProductRepo::default()),
        Arc::new(StubIdentity(identity_outcome)),
    ));
    build_router(HttpState { services })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = make_router(IdentityOutcome::Success);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn audit_types_endpoint_lists_the_registry() {
    let app = make_router(IdentityOutcome::Success);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/audit/types")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["audit_type_id"], 1);
    assert_eq!(json[1]["name"], "Login");
}

#[tokio::test]
async fn creating_an_entry_with_an_unknown_type_code_is_a_bad_request() {
    let app = make_router(IdentityOutcome::Success);
    let payload = serde_json::json!({
        "audit_type_id": 42,
        "audit_content": "something happened",
        "action_by": "admin",
        "date": "2024-09-11T12:00:00"
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/audit/logs")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("unknown audit type code")
    );
}

#[tokio::test]
async fn rejected_login_returns_400_with_a_generic_message() {
    let app = make_router(IdentityOutcome::InvalidPassword);
    let payload = serde_json::json!({
        "username": "admin",
        "password": "wrong"
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid username or password");
}

#[tokio::test]
async fn unknown_audit_log_id_serializes_as_null() {
    let app = make_router(IdentityOutcome::Success);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/audit/logs/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.is_null());
}
