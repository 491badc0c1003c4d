//! Router assembly

use axum::{Router, handler::Handler, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{health_check, list_routes, spa_fallback};
use crate::state::AppState;

/// Build the host router: API endpoints, static files, then the app shell
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(state.config.static_dir())
        .fallback(spa_fallback.with_state(state.clone()));

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/api/routes", get(list_routes));

    // Assets live under the deployment base; anything outside it only gets the
    // app shell (as a 404)
    let base = &state.config.router.base;
    let router = if base.is_root() {
        router.fallback_service(static_files)
    } else {
        router
            .nest_service(base.as_str(), static_files)
            .fallback(spa_fallback)
    };

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
