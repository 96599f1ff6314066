use super::models::InjectionWell;
use super::services;
use crate::common::errors::{ApiResult, DbErrorExt};
use crate::common::state::AppState;
use axum::extract::{Path, State};
use axum::response::Json;
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_injections))
        .with_state(state.clone())
}

#[utoipa::path(
    get,
    path = "/{api_id}",
    params(("api_id" = String, Path, description = "API well number without dashes")),
    responses(
        (status = 200, description = "Injection rows for the API number, possibly empty", body = Vec<InjectionWell>),
        (status = 503, description = "Database unavailable")
    ),
    tag = "injection",
    summary = "Injection pressures by API number"
)]
pub async fn get_injections(
    State(state): State<AppState>,
    Path(api_id): Path<String>,
) -> ApiResult<Json<Vec<InjectionWell>>> {
    let rows = services::injections_for_api(&state.db, &api_id)
        .await
        .map_err(|e| e.to_api_error("injection"))?;

    Ok(Json(rows))
}
