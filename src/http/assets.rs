//! Static assets and the single-page app fallback.
//!
//! Images are served from a directory under `/images`. Every other path
//! outside the API returns the app document so client-side routing works.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Prefix reserved for the JSON API.
pub const API_PREFIX: &str = "/api";

/// Service for the image directory.
pub fn images_service(dir: &str) -> ServeDir {
    ServeDir::new(dir)
}

fn is_api_path(path: &str) -> bool {
    path == API_PREFIX || path.starts_with("/api/")
}

/// Fallback for every unmatched route, including a known path hit with an
/// unsupported method.
pub async fn spa_fallback(State(state): State<AppState>, request: Request) -> Response {
    if is_api_path(request.uri().path()) {
        tracing::debug!(path = %request.uri().path(), "Unmatched API route");
        return ApiError::RouteNotFound.into_response();
    }

    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }

    match ServeFile::new(state.spa_index.as_path()).oneshot(request).await {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}
