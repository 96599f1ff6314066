use super::services::injections_for_api;
use crate::config::test_helpers::{setup_test_app, setup_test_db};
use crate::test_helpers::*;
use axum::http::StatusCode;

#[tokio::test]
async fn test_injections_for_api() {
    let db = setup_test_db().await;
    create_test_injection(&db, "3002512345", "SWD", "Salt Draw 1").await;
    create_test_injection(&db, "3002599999", "INJ", "Other").await;

    let rows = injections_for_api(&db, "3002512345").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].well_type.as_deref(), Some("SWD"));
    assert_eq!(rows[0].well_name.as_deref(), Some("Salt Draw 1"));
    assert_eq!(rows[0].well_status.as_deref(), Some("Active"));
    assert_eq!(rows[0].well_county.as_deref(), Some("Lea"));
}

#[tokio::test]
async fn test_injection_route() {
    let db = setup_test_db().await;
    create_test_injection(&db, "3001511111", "WAG", "Unit 4").await;
    let app = setup_test_app(&db);

    let (status, body) = get_json(&app, "/api/v1/injection/3001511111").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["well_type"], "WAG");
    assert_eq!(body[0]["well_name"], "Unit 4");

    let (status, body) = get_json(&app, "/api/v1/injection/0000000000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}
