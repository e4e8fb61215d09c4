//! # Project API
//!
//! Listing, lookup, voting and submission of garden projects.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use greenhouse_core::models::{NewProject, Project, VoteOutcome};
use greenhouse_core::service::parse_project_id;
use greenhouse_core::{Envelope, ProjectQuery};

use crate::reply::ApiReply;
use crate::SharedState;

pub fn project_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/:id", get(get_project))
        .route("/:id/vote", post(vote_project))
}

/// List a week's projects, optionally searched and filtered
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(ProjectQuery),
    responses(
        (status = 200, description = "Projects of the week in display order", body = Envelope<Vec<Project>>)
    )
)]
pub async fn list_projects(
    State(state): State<SharedState>,
    Query(query): Query<ProjectQuery>,
) -> ApiReply<Vec<Project>> {
    state.service.search_projects(&query).into()
}

/// Fetch one project by id
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "The project", body = Envelope<Project>),
        (status = 404, description = "No project with that id", body = Envelope<Project>)
    )
)]
pub async fn get_project(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> ApiReply<Project> {
    let envelope = match parse_project_id(&raw_id) {
        Ok(id) => state.service.get_project_by_id(id),
        Err(e) => Envelope::failure(&e),
    };
    envelope.into()
}

/// Cast one vote for a project
#[utoipa::path(
    post,
    path = "/api/projects/{id}/vote",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Updated vote count and growth", body = Envelope<VoteOutcome>),
        (status = 404, description = "No project with that id", body = Envelope<VoteOutcome>)
    )
)]
pub async fn vote_project(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> ApiReply<VoteOutcome> {
    let envelope = match parse_project_id(&raw_id) {
        Ok(id) => state.service.vote(id),
        Err(e) => Envelope::failure(&e),
    };
    envelope.into()
}

/// Submit a new project into the submission week
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = NewProject,
    responses(
        (status = 200, description = "The planted project", body = Envelope<Project>),
        (status = 400, description = "Missing name or description, or malformed body", body = Envelope<Project>)
    )
)]
pub async fn create_project(
    State(state): State<SharedState>,
    payload: Result<Json<NewProject>, JsonRejection>,
) -> ApiReply<Project> {
    let envelope = match payload {
        Ok(Json(fields)) => state.service.create_project(fields),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected project submission");
            Envelope::rejected(rejection.status().as_u16(), rejection.body_text())
        }
    };
    envelope.into()
}
