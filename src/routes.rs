use crate::common::state::AppState;
use crate::config::Config;
use crate::{detail, injection, wells};
use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub fn build_router(db: &DatabaseConnection, config: &Config) -> Router {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Aquifer Wells API",
            description = "Read-only access to well locations, record-sets and geothermal samples"
        ),
        tags(
            (name = "wells", description = "Wells and their record-set associations"),
            (name = "injection", description = "Injection pressure lookups"),
            (name = "pages", description = "Server-rendered map and detail pages")
        )
    )]
    struct ApiDoc;

    let app_state = AppState::new(db.clone(), config.clone());

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(crate::common::views::router(&app_state)) // Root routes
        .merge(detail::views::router(&app_state))
        .nest("/api/v1/wells", wells::views::router(&app_state))
        .nest("/api/v1/injection", injection::views::router(&app_state))
        .split_for_parts();

    router
        // Older clients request the listing with a trailing slash
        .route(
            "/api/v1/wells/",
            get(wells::views::list_wells).with_state(app_state.clone()),
        )
        .merge(Scalar::with_url("/api/docs", api))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
}
