use super::RecordSetKind;
use crate::config::test_helpers::{setup_test_app, setup_test_db};
use crate::test_helpers::*;
use axum::http::StatusCode;
use rstest::rstest;

#[test]
fn test_kind_names_round_trip() {
    for kind in RecordSetKind::ALL {
        assert_eq!(kind.as_str().parse::<RecordSetKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn test_unknown_kind_is_rejected() {
    let err = "pumps".parse::<RecordSetKind>().unwrap_err();
    assert!(err.contains("pumps"));
    assert!("Bore".parse::<RecordSetKind>().is_err());
}

#[test]
fn test_kind_serializes_lowercase() {
    let json = serde_json::to_string(&RecordSetKind::Lithstrat).unwrap();
    assert_eq!(json, r#""lithstrat""#);
}

#[rstest]
#[case::bore("bore")]
#[case::casing("casing")]
#[case::drillers("drillers")]
#[case::history("history")]
#[case::liner("liner")]
#[case::lithlog("lithlog")]
#[case::lithstrat("lithstrat")]
#[case::logdata("logdata")]
#[case::perforation("perforation")]
#[case::petro("petro")]
#[case::production("production")]
#[case::samples("samples")]
#[case::treatment("treatment")]
#[case::tubing("tubing")]
#[tokio::test]
async fn test_every_kind_is_empty_for_well_without_records(#[case] kind: &str) {
    let db = setup_test_db().await;
    create_test_well(&db, 21, Some(32.5), Some(-103.5)).await;
    let app = setup_test_app(&db);

    let (status, body) = get_json(&app, &format!("/api/v1/wells/21/{kind}")).await;
    assert_eq!(status, StatusCode::OK, "kind {kind}: {body}");
    assert_eq!(body, serde_json::json!([]));

    let (status, _) = get_json(&app, &format!("/api/v1/wells/22/{kind}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "kind {kind} on a missing well");
}

#[tokio::test]
async fn test_casing_rows_flattened_across_records() {
    let db = setup_test_db().await;
    let well = create_test_well(&db, 30, None, None).await;
    let first = create_test_record(&db, &well, "first").await;
    let second = create_test_record(&db, &well, "second").await;
    create_test_casing(&db, &second, 900.0).await;
    create_test_casing(&db, &first, 40.0).await;
    let app = setup_test_app(&db);

    let (status, body) = get_json(&app, "/api/v1/wells/30/casing").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array of casing rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["depth"], 40.0);
    assert_eq!(rows[1]["depth"], 900.0);
    assert_eq!(
        rows[0]["record_set_id"],
        serde_json::json!(first.record_set_id)
    );
}
