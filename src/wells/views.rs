use super::models::{Feature, FeatureCollection, Well, WellListing};
use crate::common::errors::{ApiError, ApiResult, DbErrorExt};
use crate::common::state::AppState;
use crate::graph::services;
use crate::not_found;
use crate::records::{
    RecordSetChild, RecordSetKind, bore, casing, drillers, history, liner, lithlog, lithstrat,
    logdata, perforation, petro, production, treatment, tubing,
};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json, Response};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_wells))
        .routes(routes!(get_well))
        .routes(routes!(get_well_association))
        .with_state(state.clone())
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WellListQuery {
    /// Output format. `geojson` returns a GeoJSON FeatureCollection.
    pub f: Option<String>,
}

/// Well ids are integers; anything else is a client error rather than an
/// unknown well.
pub(crate) fn parse_well_id(raw: &str) -> ApiResult<i32> {
    raw.parse().map_err(|_| ApiError::InvalidRequest {
        field: "well_id".to_string(),
        message: format!("'{raw}' is not an integer well id"),
    })
}

/// What can follow `/wells/{id}/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Association {
    Records,
    Header,
    Spots,
    RecordSet(RecordSetKind),
}

impl Association {
    fn parse(segment: &str) -> Option<Self> {
        match segment {
            "records" => Some(Association::Records),
            "header" => Some(Association::Header),
            "spots" => Some(Association::Spots),
            other => other.parse().ok().map(Association::RecordSet),
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    params(WellListQuery),
    responses(
        (status = 200, description = "Wells with an API number, as `{well, header}` pairs or a GeoJSON FeatureCollection when `f=geojson`", body = Vec<WellListing>),
        (status = 503, description = "Database unavailable")
    ),
    tag = "wells",
    summary = "List wells"
)]
pub async fn list_wells(
    State(state): State<AppState>,
    Query(query): Query<WellListQuery>,
) -> ApiResult<Response> {
    let rows = services::list_wells(&state.db)
        .await
        .map_err(|e| e.to_api_error("well"))?;

    if query.f.as_deref() == Some("geojson") {
        let collection: FeatureCollection = rows
            .iter()
            .map(|(well, header)| Feature::from_listing(well, header))
            .collect();
        return Ok(Json(collection).into_response());
    }

    let listing: Vec<WellListing> = rows
        .into_iter()
        .map(|(well, header)| WellListing { well, header })
        .collect();

    Ok(Json(listing).into_response())
}

#[utoipa::path(
    get,
    path = "/{well_id}",
    params(("well_id" = i32, Path, description = "Well OBJECTID")),
    responses(
        (status = 200, description = "The well with its derived point geometry", body = Well),
        (status = 400, description = "Well id is not an integer"),
        (status = 404, description = "Well not found")
    ),
    tag = "wells",
    summary = "Get a well"
)]
pub async fn get_well(
    State(state): State<AppState>,
    Path(well_id): Path<String>,
) -> ApiResult<Json<Well>> {
    let well_id = parse_well_id(&well_id)?;
    let well = services::find_well(&state.db, well_id)
        .await
        .map_err(|e| e.to_api_error("well"))?
        .ok_or_else(|| not_found!("well", well_id))?;
    let header = services::header_of(&state.db, &well)
        .await
        .map_err(|e| e.to_api_error("well_header"))?;

    Ok(Json(Well::new(&well, header.as_ref())))
}

#[utoipa::path(
    get,
    path = "/{well_id}/{association}",
    params(
        ("well_id" = i32, Path, description = "Well OBJECTID"),
        ("association" = String, Path, description = "One of records, header, spots, bore, casing, drillers, history, liner, lithlog, lithstrat, logdata, perforation, petro, production, samples, treatment, tubing")
    ),
    responses(
        (status = 200, description = "Rows of the association across all record-sets of the well, in record order"),
        (status = 400, description = "Well id is not an integer"),
        (status = 404, description = "Well or association not found")
    ),
    tag = "wells",
    summary = "Get well associations"
)]
pub async fn get_well_association(
    State(state): State<AppState>,
    Path((well_id, association)): Path<(String, String)>,
) -> ApiResult<Response> {
    let well_id = parse_well_id(&well_id)?;
    let Some(parsed) = Association::parse(&association) else {
        return Err(not_found!("association", association));
    };
    let db = &state.db;

    match parsed {
        Association::Records => {
            let records = services::well_records(db, well_id)
                .await
                .map_err(|e| e.to_api_error("well_records"))?
                .ok_or_else(|| not_found!("well", well_id))?;
            Ok(Json(records).into_response())
        }
        Association::Header => {
            let header = services::well_header(db, well_id)
                .await
                .map_err(|e| e.to_api_error("well_header"))?
                .ok_or_else(|| not_found!("well", well_id))?;
            Ok(Json(header).into_response())
        }
        Association::Spots => {
            let spots = services::well_spots(db, well_id)
                .await
                .map_err(|e| e.to_api_error("well_spots"))?
                .ok_or_else(|| not_found!("well", well_id))?;
            Ok(Json(spots).into_response())
        }
        Association::RecordSet(kind) => recordset_response(db, well_id, kind).await,
    }
}

async fn recordset_response(
    db: &DatabaseConnection,
    well_id: i32,
    kind: RecordSetKind,
) -> ApiResult<Response> {
    match kind {
        RecordSetKind::Bore => flattened::<bore::Entity>(db, well_id, kind).await,
        RecordSetKind::Casing => flattened::<casing::Entity>(db, well_id, kind).await,
        RecordSetKind::Drillers => flattened::<drillers::Entity>(db, well_id, kind).await,
        RecordSetKind::History => flattened::<history::Entity>(db, well_id, kind).await,
        RecordSetKind::Liner => flattened::<liner::Entity>(db, well_id, kind).await,
        RecordSetKind::Lithlog => flattened::<lithlog::Entity>(db, well_id, kind).await,
        RecordSetKind::Lithstrat => flattened::<lithstrat::Entity>(db, well_id, kind).await,
        RecordSetKind::Logdata => flattened::<logdata::Entity>(db, well_id, kind).await,
        RecordSetKind::Perforation => flattened::<perforation::Entity>(db, well_id, kind).await,
        RecordSetKind::Petro => flattened::<petro::Entity>(db, well_id, kind).await,
        RecordSetKind::Production => flattened::<production::Entity>(db, well_id, kind).await,
        RecordSetKind::Samples => {
            flattened::<crate::samples::models::Entity>(db, well_id, kind).await
        }
        RecordSetKind::Treatment => flattened::<treatment::Entity>(db, well_id, kind).await,
        RecordSetKind::Tubing => flattened::<tubing::Entity>(db, well_id, kind).await,
    }
}

async fn flattened<E>(
    db: &DatabaseConnection,
    well_id: i32,
    kind: RecordSetKind,
) -> ApiResult<Response>
where
    E: RecordSetChild,
    E::Model: Serialize,
{
    let rows = services::get_recordset_assoc::<E>(db, well_id)
        .await
        .map_err(|e| e.to_api_error(kind.as_str()))?
        .ok_or_else(|| not_found!("well", well_id))?;

    tracing::debug!(well_id, %kind, rows = rows.len(), "flattened record-set association");

    Ok(Json(rows).into_response())
}
