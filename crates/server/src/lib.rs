//! Greenhouse Server
//!
//! Axum router exposing the garden catalog as JSON endpoints under `/api`.

pub mod api;
pub mod cli;
pub mod reply;
pub mod state;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use state::{AppState, SharedState};

/// The full application router, ready to serve
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .nest("/api", api::api_routes())
        .fallback(reply::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
