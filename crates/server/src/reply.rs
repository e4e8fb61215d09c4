//! Envelope to HTTP response conversion.

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use greenhouse_core::Envelope;
use serde::Serialize;

/// An [`Envelope`] sent with its own status code
pub struct ApiReply<T>(pub Envelope<T>);

impl<T> From<Envelope<T>> for ApiReply<T> {
    fn from(envelope: Envelope<T>) -> Self {
        Self(envelope)
    }
}

impl<T: Serialize> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0)).into_response()
    }
}

/// Fallback for anything outside the API surface
pub async fn route_not_found(uri: Uri) -> ApiReply<()> {
    tracing::debug!(path = %uri.path(), "No route");
    Envelope::rejected(StatusCode::NOT_FOUND.as_u16(), "Route not found").into()
}
