use super::views::{escape_html, render_detail};
use crate::config::test_helpers::{setup_test_app, setup_test_db};
use crate::series::models::{BhtSummary, DepthSeries, WellSeries};
use crate::test_helpers::*;
use axum::http::StatusCode;

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<a href="x">&'{{"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;&#123;&#123;"
    );
    assert_eq!(escape_html("3002512345"), "3002512345");
}

#[test]
fn test_render_fills_every_placeholder() {
    let series = WellSeries {
        temperature: DepthSeries::from_pairs(vec![(Some(10.0), Some(65.0))]),
        thermal_conductivity: None,
        heat_flow: Some(DepthSeries::from_pairs(vec![(Some(50.0), Some(2.0))])),
        bht: BhtSummary {
            diameter: Some(8.75),
            bht: Some(190.0),
            depth: None,
        },
    };

    let page = render_detail(12, "<b>api</b>", &series).unwrap();
    assert!(!page.contains("{{"));
    assert!(page.contains("Well 12"));
    assert!(page.contains("&lt;b&gt;api&lt;/b&gt;"));
    assert!(page.contains(r#"<td id="bht-diameter">8.75</td>"#));
    assert!(page.contains(r#"<td id="bht-depth"></td>"#));
    assert!(page.contains(r#""x":[65.0],"y":[10.0]"#));
}

#[tokio::test]
async fn test_detail_page_for_missing_well() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);

    let (status, _) = get_text(&app, "/well/detail/77").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_detail_page_for_well_without_records() {
    let db = setup_test_db().await;
    create_test_well(&db, 13, Some(32.0), Some(-104.0)).await;
    let app = setup_test_app(&db);

    let (status, page) = get_text(&app, "/well/detail/13").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Well 13"));
    assert!(page.contains(r#"<span id="api"></span>"#));
    assert!(page.contains(r#"<td id="bht-value"></td>"#));
}

#[tokio::test]
async fn test_detail_page_plots_measurements() {
    let db = setup_test_db().await;
    let well = create_test_well(&db, 14, Some(32.0), Some(-104.0)).await;
    create_test_header(&db, &well, Some("3001514014")).await;
    let record = create_test_record(&db, &well, "Plotted").await;
    let sample = create_test_sample(&db, &record, "log").await;
    create_test_temperature(&db, &sample, 250.0, 81.5).await;
    let interval = create_test_interval(&db, &sample, 100.0, 200.0).await;
    create_test_conductivity(&db, &interval, 2.75).await;
    create_test_bht(&db, &sample, None, 150.0, 3000.0).await;
    let app = setup_test_app(&db);

    let (status, page) = get_text(&app, "/well/detail/14").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("3001514014"));
    assert!(page.contains(r#""x":[81.5],"y":[250.0]"#));
    assert!(page.contains(r#""x":[2.75],"y":[100.0]"#));
    assert!(page.contains(r#"<td id="bht-diameter"></td>"#));
    assert!(page.contains(r#"<td id="bht-value">150</td>"#));
}

#[tokio::test]
async fn test_map_page() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);

    let (status, page) = get_text(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("/static/js/map.js"));
}
