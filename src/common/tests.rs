use super::models::{HealthCheck, MapboxToken};
use crate::config::test_helpers::{setup_test_app, setup_test_db};
use crate::test_helpers::extract_response_body;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

#[test]
fn test_health_check_serialization() {
    let health = HealthCheck {
        status: "ok".to_string(),
    };

    let json = serde_json::to_string(&health).unwrap();
    assert_eq!(json, r#"{"status":"ok"}"#);
}

#[test]
fn test_mapbox_token_default_is_null() {
    let json = serde_json::to_string(&MapboxToken::default()).unwrap();
    assert_eq!(json, r#"{"token":null}"#);
}

#[tokio::test]
async fn test_healthz_reports_ok() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_mapbox_token_passthrough() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/mapboxtoken")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], "pk.test-token");
}
