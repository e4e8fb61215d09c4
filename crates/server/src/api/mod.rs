pub mod garden;
pub mod projects;

use axum::{routing::get, Json, Router};
use greenhouse_core::models::{
    CatalogStats, GardenOverview, Gardener, NewProject, PlantType, Project, TagsInput,
    VoteOutcome, WeekSummary,
};
use utoipa::OpenApi;

use crate::SharedState;

pub use garden::garden_routes;
pub use projects::project_routes;

// === OpenAPI Definition ===

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Greenhouse API",
        version = "1.0.0",
        description = "Weekly showcase garden: browse, vote and plant projects"
    ),
    paths(
        projects::list_projects,
        projects::get_project,
        projects::vote_project,
        projects::create_project,
        garden::get_stats,
        garden::list_weeks,
        garden::list_gardeners,
        garden::garden_overview
    ),
    components(
        schemas(
            Project,
            PlantType,
            Gardener,
            VoteOutcome,
            WeekSummary,
            CatalogStats,
            NewProject,
            TagsInput,
            GardenOverview
        )
    ),
    tags(
        (name = "projects", description = "Project listing, voting and submission"),
        (name = "garden", description = "Catalog-wide reads")
    )
)]
pub struct ApiDoc;

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Everything mounted under `/api`
pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .nest("/projects", project_routes())
        .merge(garden_routes())
        .route("/openapi.json", get(serve_openapi))
}
