//! Catalog-wide reads: stats, week selector, roster, and the page overview.

use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use greenhouse_core::models::{CatalogStats, GardenOverview, Gardener, WeekSummary};
use greenhouse_core::Envelope;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::reply::ApiReply;
use crate::SharedState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeekParam {
    /// Week key, defaults to the current week
    pub week: Option<String>,
}

pub fn garden_routes() -> Router<SharedState> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/weeks", get(list_weeks))
        .route("/gardeners", get(list_gardeners))
        .route("/garden", get(garden_overview))
}

/// Aggregate counts across every week
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "garden",
    responses(
        (status = 200, description = "Catalog totals", body = Envelope<CatalogStats>)
    )
)]
pub async fn get_stats(State(state): State<SharedState>) -> ApiReply<CatalogStats> {
    state.service.get_stats().into()
}

/// Week partitions with labels and project counts
#[utoipa::path(
    get,
    path = "/api/weeks",
    tag = "garden",
    responses(
        (status = 200, description = "Weeks in insertion order", body = Envelope<Vec<WeekSummary>>)
    )
)]
pub async fn list_weeks(State(state): State<SharedState>) -> ApiReply<Vec<WeekSummary>> {
    state.service.list_weeks().into()
}

#[utoipa::path(
    get,
    path = "/api/gardeners",
    tag = "garden",
    responses(
        (status = 200, description = "Gardener roster", body = Envelope<Vec<Gardener>>)
    )
)]
pub async fn list_gardeners(State(state): State<SharedState>) -> ApiReply<Vec<Gardener>> {
    state.service.list_gardeners().into()
}

/// Everything the garden page needs for one week
#[utoipa::path(
    get,
    path = "/api/garden",
    tag = "garden",
    params(WeekParam),
    responses(
        (status = 200, description = "Projects, weeks and gardeners", body = Envelope<GardenOverview>)
    )
)]
pub async fn garden_overview(
    State(state): State<SharedState>,
    Query(param): Query<WeekParam>,
) -> ApiReply<GardenOverview> {
    state.service.garden_overview(param.week.as_deref()).into()
}
