use super::models::{flatten_by_parent, group_by_parent};
use super::services::{
    fetch_well, get_recordset_assoc, list_wells, well_header, well_records, well_spots,
};
use crate::config::test_helpers::setup_test_db;
use crate::records::{bore, casing};
use crate::samples::models as samples;
use crate::test_helpers::*;

#[tokio::test]
async fn test_fetch_missing_well_is_none() {
    let db = setup_test_db().await;
    let graph = fetch_well(&db, 404).await.unwrap();
    assert!(graph.is_none());
}

#[tokio::test]
async fn test_fetch_well_without_records() {
    let db = setup_test_db().await;
    let well = create_test_well(&db, 1, Some(32.1), Some(-104.2)).await;

    let graph = fetch_well(&db, 1).await.unwrap().expect("well exists");
    assert_eq!(graph.well, well);
    assert!(graph.header.is_none());
    assert!(graph.records.is_empty());
    assert!(graph.first_sample().is_none());
    assert_eq!(graph.api(), None);
}

#[tokio::test]
async fn test_fetch_well_hydrates_sample_subtree() {
    let db = setup_test_db().await;
    let well = create_test_well(&db, 7, Some(35.0), Some(-106.0)).await;
    create_test_header(&db, &well, Some("3001520001")).await;

    let record = create_test_record(&db, &well, "Federal 1").await;
    let sample = create_test_sample(&db, &record, "core").await;
    let shallow = create_test_interval(&db, &sample, 100.0, 150.0).await;
    let deep = create_test_interval(&db, &sample, 50.0, 100.0).await;
    create_test_heat_flow(&db, &shallow, 1.5).await;
    create_test_conductivity(&db, &deep, 2.2).await;
    create_test_temperature(&db, &sample, 10.0, 70.0).await;
    create_test_bht(&db, &sample, Some(8.75), 190.0, 4000.0).await;

    let graph = fetch_well(&db, 7).await.unwrap().expect("well exists");
    assert_eq!(graph.api(), Some("3001520001"));
    assert_eq!(graph.records.len(), 1);

    let node = graph.first_sample().expect("sample loaded");
    assert_eq!(node.sample.sample_set_id, sample.sample_set_id);
    assert_eq!(node.intervals.len(), 2);
    assert_eq!(node.intervals[0].interval.interval_id, shallow.interval_id);
    assert_eq!(node.intervals[0].heat_flows.len(), 1);
    assert!(node.intervals[0].conductivities.is_empty());
    assert_eq!(node.intervals[1].conductivities[0].conductivity, Some(2.2));
    assert_eq!(node.temperatures.len(), 1);
    assert_eq!(node.bht_headers.len(), 1);
    assert_eq!(node.bht_headers[0].data[0].bht, Some(190.0));
}

#[tokio::test]
async fn test_first_sample_skips_records_without_samples() {
    let db = setup_test_db().await;
    let well = create_test_well(&db, 3, None, None).await;
    create_test_record(&db, &well, "empty").await;
    let second = create_test_record(&db, &well, "sampled").await;
    let sample = create_test_sample(&db, &second, "cuttings").await;

    let graph = fetch_well(&db, 3).await.unwrap().expect("well exists");
    assert_eq!(graph.records.len(), 2);
    assert!(graph.records[0].samples.is_empty());
    assert_eq!(
        graph.first_sample().map(|node| node.sample.sample_set_id),
        Some(sample.sample_set_id)
    );
}

#[tokio::test]
async fn test_list_wells_requires_api_number() {
    let db = setup_test_db().await;
    let listed = create_test_well(&db, 1, Some(33.0), Some(-105.0)).await;
    create_test_header(&db, &listed, Some("3002512345")).await;
    let blank = create_test_well(&db, 2, Some(34.0), Some(-105.5)).await;
    create_test_header(&db, &blank, None).await;
    create_test_well(&db, 3, Some(34.5), Some(-106.5)).await;

    let rows = list_wells(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.object_id, 1);
    assert_eq!(rows[0].1.api.as_deref(), Some("3002512345"));
}

#[tokio::test]
async fn test_recordset_assoc_flattens_in_record_order() {
    let db = setup_test_db().await;
    let well = create_test_well(&db, 11, None, None).await;
    let first = create_test_record(&db, &well, "first").await;
    let second = create_test_record(&db, &well, "second").await;
    create_test_bore(&db, &second, 300.0).await;
    create_test_bore(&db, &first, 100.0).await;
    create_test_bore(&db, &first, 200.0).await;

    let bores = get_recordset_assoc::<bore::Entity>(&db, 11)
        .await
        .unwrap()
        .expect("well exists");
    let depths: Vec<Option<f64>> = bores.iter().map(|b| b.from_depth).collect();
    assert_eq!(depths, vec![Some(100.0), Some(200.0), Some(300.0)]);
}

#[tokio::test]
async fn test_recordset_assoc_for_missing_and_empty_wells() {
    let db = setup_test_db().await;
    assert!(
        get_recordset_assoc::<casing::Entity>(&db, 99)
            .await
            .unwrap()
            .is_none()
    );

    create_test_well(&db, 12, None, None).await;
    let rows = get_recordset_assoc::<samples::Entity>(&db, 12)
        .await
        .unwrap()
        .expect("well exists");
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_well_spots() {
    let db = setup_test_db().await;
    let well = create_test_well(&db, 5, None, None).await;
    create_test_spot(&db, &well).await;

    let found = well_spots(&db, 5).await.unwrap().expect("well exists");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].well_data_id, well.well_data_id);
    assert!(well_spots(&db, 6).await.unwrap().is_none());
}

#[tokio::test]
async fn test_well_records_and_header_without_hydration() {
    let db = setup_test_db().await;
    let well = create_test_well(&db, 15, None, None).await;
    let header = create_test_header(&db, &well, Some("3002515015")).await;
    let record = create_test_record(&db, &well, "Shallow").await;
    create_test_sample(&db, &record, "cuttings").await;

    let records = well_records(&db, 15).await.unwrap().expect("well exists");
    assert_eq!(records, vec![record]);
    assert_eq!(well_header(&db, 15).await.unwrap(), Some(Some(header)));

    create_test_well(&db, 16, None, None).await;
    assert_eq!(well_header(&db, 16).await.unwrap(), Some(None));
    assert_eq!(well_records(&db, 16).await.unwrap(), Some(vec![]));

    assert!(well_records(&db, 17).await.unwrap().is_none());
    assert!(well_header(&db, 17).await.unwrap().is_none());
}

#[test]
fn test_group_by_parent_keeps_order_and_drops_orphans() {
    let rows = vec![(Some(1), "a"), (None, "orphan"), (Some(2), "b"), (Some(1), "c")];
    let grouped = group_by_parent(rows, |row| row.0);

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[&1], vec![(Some(1), "a"), (Some(1), "c")]);
    assert_eq!(grouped[&2], vec![(Some(2), "b")]);
}

#[test]
fn test_flatten_by_parent_follows_parent_order() {
    let rows = vec![(Some('b'), 1), (Some('a'), 2), (Some('z'), 3), (Some('b'), 4)];
    let flat = flatten_by_parent(&['a', 'b'], rows, |row| row.0);

    let values: Vec<i32> = flat.into_iter().map(|row| row.1).collect();
    assert_eq!(values, vec![2, 1, 4]);
}
