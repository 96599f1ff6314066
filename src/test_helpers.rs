/// Shared test helpers for seeding the well hierarchy and reading responses.
///
/// Builders follow the storage hierarchy:
/// Wells → {Header, Spots, Records → {Bore, Casing, ..., Samples}}
/// and Samples → {Intervals → {HeatFlow, Conductivity}, Temperatures, BHT headers → BHT data}
use crate::records::{bore, casing, models as records};
use crate::samples::{
    bht_data, bht_headers, conductivities, heat_flows, intervals, models as samples, temperatures,
};
use crate::wells::{headers, models as wells, spots};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

/// Extract response body as JSON for testing
pub async fn extract_response_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body: Value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| json!({"error": "Invalid JSON response"}));
    (status, body)
}

/// Extract response body as text, for the HTML pages
pub async fn extract_response_text(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// GET `uri` against the router and return status plus JSON body
pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    extract_response_body(response).await
}

pub async fn get_text(app: &axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    extract_response_text(response).await
}

/// Create a well at the given coordinates with a fresh `WellDataID`
pub async fn create_test_well(
    db: &DatabaseConnection,
    object_id: i32,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> wells::Model {
    wells::ActiveModel {
        object_id: Set(object_id),
        well_data_id: Set(Some(Uuid::new_v4())),
        latitude: Set(latitude),
        longitude: Set(longitude),
    }
    .insert(db)
    .await
    .expect("Failed to insert test well")
}

pub async fn create_test_header(
    db: &DatabaseConnection,
    well: &wells::Model,
    api: Option<&str>,
) -> headers::Model {
    headers::ActiveModel {
        object_id: Set(well.object_id),
        well_data_id: Set(well.well_data_id),
        api: Set(api.map(str::to_string)),
    }
    .insert(db)
    .await
    .expect("Failed to insert test header")
}

pub async fn create_test_spot(db: &DatabaseConnection, well: &wells::Model) -> spots::Model {
    spots::ActiveModel {
        spot_id: Set(Uuid::new_v4()),
        well_data_id: Set(well.well_data_id),
        fgdc_code: Set(Some("25.9".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test spot")
}

pub async fn create_test_record(
    db: &DatabaseConnection,
    well: &wells::Model,
    well_name: &str,
) -> records::Model {
    records::ActiveModel {
        record_set_id: Set(Uuid::new_v4()),
        well_data_id: Set(well.well_data_id),
        well_name: Set(Some(well_name.to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test record")
}

pub async fn create_test_bore(
    db: &DatabaseConnection,
    record: &records::Model,
    from_depth: f64,
) -> bore::Model {
    bore::ActiveModel {
        global_id: Set(Uuid::new_v4()),
        record_set_id: Set(Some(record.record_set_id)),
        from_depth: Set(Some(from_depth)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test bore")
}

pub async fn create_test_casing(
    db: &DatabaseConnection,
    record: &records::Model,
    depth: f64,
) -> casing::Model {
    casing::ActiveModel {
        global_id: Set(Uuid::new_v4()),
        record_set_id: Set(Some(record.record_set_id)),
        depth: Set(Some(depth)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test casing")
}

pub async fn create_test_sample(
    db: &DatabaseConnection,
    record: &records::Model,
    name: &str,
) -> samples::Model {
    samples::ActiveModel {
        sample_set_id: Set(Uuid::new_v4()),
        record_set_id: Set(Some(record.record_set_id)),
        name: Set(Some(name.to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test sample")
}

pub async fn create_test_interval(
    db: &DatabaseConnection,
    sample: &samples::Model,
    from_depth: f64,
    to_depth: f64,
) -> intervals::Model {
    intervals::ActiveModel {
        interval_id: Set(Uuid::new_v4()),
        sample_set_id: Set(Some(sample.sample_set_id)),
        from_depth: Set(Some(from_depth)),
        to_depth: Set(Some(to_depth)),
    }
    .insert(db)
    .await
    .expect("Failed to insert test interval")
}

pub async fn create_test_heat_flow(
    db: &DatabaseConnection,
    interval: &intervals::Model,
    ka: f64,
) -> heat_flows::Model {
    heat_flows::ActiveModel {
        global_id: Set(Uuid::new_v4()),
        interval_id: Set(Some(interval.interval_id)),
        ka: Set(Some(ka)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test heat flow")
}

pub async fn create_test_conductivity(
    db: &DatabaseConnection,
    interval: &intervals::Model,
    conductivity: f64,
) -> conductivities::Model {
    conductivities::ActiveModel {
        global_id: Set(Uuid::new_v4()),
        interval_id: Set(Some(interval.interval_id)),
        conductivity: Set(Some(conductivity)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test conductivity")
}

pub async fn create_test_temperature(
    db: &DatabaseConnection,
    sample: &samples::Model,
    depth: f64,
    temperature: f64,
) -> temperatures::Model {
    temperatures::ActiveModel {
        global_id: Set(Uuid::new_v4()),
        sample_set_id: Set(Some(sample.sample_set_id)),
        depth: Set(Some(depth)),
        temperature: Set(Some(temperature)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test temperature")
}

/// BHT header plus its single reading
pub async fn create_test_bht(
    db: &DatabaseConnection,
    sample: &samples::Model,
    bore_diameter: Option<f64>,
    bht: f64,
    depth: f64,
) -> (bht_headers::Model, bht_data::Model) {
    let header = bht_headers::ActiveModel {
        bht_id: Set(Uuid::new_v4()),
        sample_set_id: Set(Some(sample.sample_set_id)),
        bore_diameter: Set(bore_diameter),
    }
    .insert(db)
    .await
    .expect("Failed to insert test BHT header");

    let data = bht_data::ActiveModel {
        bht_id: Set(header.bht_id),
        bht: Set(Some(bht)),
        depth: Set(Some(depth)),
    }
    .insert(db)
    .await
    .expect("Failed to insert test BHT data");

    (header, data)
}

/// Insert one row into the injection-pressure table
pub async fn create_test_injection(
    db: &DatabaseConnection,
    api_id: &str,
    well_type: &str,
    well_name: &str,
) {
    use sea_orm::{ConnectionTrait, Statement};

    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        r#"INSERT INTO "tbl_OCD_WellInjections_InjPressuresByDatePeriod_Life"
           ("API_WellID_nodash", "wellType", "wellname", "wellstatus", "wellcounty")
           VALUES (?, ?, ?, 'Active', 'Lea')"#,
        [api_id.into(), well_type.into(), well_name.into()],
    ))
    .await
    .expect("Failed to insert test injection row");
}
