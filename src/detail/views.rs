//! Server-rendered pages: the well map and the per-well detail page.

use crate::common::errors::{ApiError, ApiResult, DbErrorExt};
use crate::common::state::AppState;
use crate::graph::services;
use crate::not_found;
use crate::series::charts::Figure;
use crate::series::models::WellSeries;
use crate::series::services::well_series;
use crate::wells::views::parse_well_id;
use axum::extract::{Path, State};
use axum::response::Html;
use utoipa_axum::{router::OpenApiRouter, routes};

const MAP_TEMPLATE: &str = include_str!("../../templates/map_view.html");
const DETAIL_TEMPLATE: &str = include_str!("../../templates/well_detail_view.html");

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(map_view))
        .routes(routes!(well_detail))
        .with_state(state.clone())
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Map of all listed wells", body = String, content_type = "text/html")),
    tag = "pages"
)]
pub async fn map_view() -> Html<&'static str> {
    Html(MAP_TEMPLATE)
}

#[utoipa::path(
    get,
    path = "/well/detail/{well_id}",
    params(("well_id" = i32, Path, description = "Well OBJECTID")),
    responses(
        (status = 200, description = "Temperature, conductivity and heat-flow plots for one well", body = String, content_type = "text/html"),
        (status = 404, description = "Well not found")
    ),
    tag = "pages"
)]
pub async fn well_detail(
    State(state): State<AppState>,
    Path(well_id): Path<String>,
) -> ApiResult<Html<String>> {
    let well_id = parse_well_id(&well_id)?;
    let graph = services::fetch_well(&state.db, well_id)
        .await
        .map_err(|e| e.to_api_error("well"))?
        .ok_or_else(|| not_found!("well", well_id))?;

    let series = well_series(&graph);
    let page = render_detail(well_id, graph.api().unwrap_or_default(), &series).map_err(|e| {
        ApiError::Internal {
            message: format!("failed to encode figures: {e}"),
        }
    })?;

    Ok(Html(page))
}

/// Fills the detail template. Figures go in first so that values taken from
/// the database are never re-scanned for placeholders.
pub(crate) fn render_detail(
    well_id: i32,
    api: &str,
    series: &WellSeries,
) -> Result<String, serde_json::Error> {
    let temperature = Figure::depth_profile("Temperature (F)").with_series(&series.temperature);

    let mut conductivity = Figure::depth_profile("Thermal Conductivity");
    if let Some(values) = &series.thermal_conductivity {
        conductivity = conductivity.with_series(values);
    }

    let mut heat_flow = Figure::depth_profile("Heat Flow");
    if let Some(values) = &series.heat_flow {
        heat_flow = heat_flow.with_series(values);
    }

    Ok(DETAIL_TEMPLATE
        .replace("{{ tempvsdepth }}", &temperature.to_script_json()?)
        .replace("{{ thermal_conductivity }}", &conductivity.to_script_json()?)
        .replace("{{ heatflow }}", &heat_flow.to_script_json()?)
        .replace("{{ bht.diameter }}", &reading(series.bht.diameter))
        .replace("{{ bht.bht }}", &reading(series.bht.bht))
        .replace("{{ bht.depth }}", &reading(series.bht.depth))
        .replace("{{ well_id }}", &well_id.to_string())
        .replace("{{ api }}", &escape_html(api)))
}

fn reading(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            other => escaped.push(other),
        }
    }
    escaped
}
