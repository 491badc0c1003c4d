//! HTTP Handlers

use axum::{
    Json,
    extract::{OriginalUri, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;

use aichat_router::RouteEntry;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub routes: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        routes: state.table.len(),
    })
}

/// Route table as JSON
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteEntry>> {
    Json(state.table.entries().to_vec())
}

/// History-mode fallback: any path without a static file gets the app shell.
/// Paths the route table knows answer 200, everything else 404 so crawlers
/// and the client both see the miss. Uses the original URI because static
/// files may be nested under the deployment base.
pub async fn spa_fallback(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let status = match state
        .table
        .resolve_location(uri.path(), &state.config.router.base)
    {
        Some(entry) => {
            tracing::debug!(path = uri.path(), route = %entry.route, "serving app shell");
            StatusCode::OK
        }
        None => {
            tracing::warn!(path = uri.path(), "no route for path");
            StatusCode::NOT_FOUND
        }
    };

    match tokio::fs::read_to_string(state.config.index_path()).await {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to read app shell: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Frontend not built".into(),
                    code: "MISSING_INDEX".into(),
                }),
            )
                .into_response()
        }
    }
}
