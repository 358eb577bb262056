use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// All console API routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // WORKSPACE
        // ========================================
        .route(
            "/api/workspaces/:workspace",
            get(handlers::workspace::get_info),
        )
        .route(
            "/api/workspaces/:workspace/access-review",
            post(handlers::access_review::review),
        )
        // ========================================
        // RESOURCES
        // ========================================
        .route(
            "/api/workspaces/:workspace/applications",
            get(handlers::a001_application::list_all),
        )
        .route(
            "/api/workspaces/:workspace/applications/:name",
            get(handlers::a001_application::get_by_name),
        )
        .route(
            "/api/workspaces/:workspace/components",
            get(handlers::a002_component::list),
        )
        .route(
            "/api/workspaces/:workspace/components/:name",
            get(handlers::a002_component::get_by_name),
        )
        .route(
            "/api/workspaces/:workspace/pipelineruns",
            get(handlers::a003_pipeline_run::list),
        )
        // P900 commits derived from build pipeline runs
        .route(
            "/api/workspaces/:workspace/commits",
            get(handlers::p900_commits::list),
        )
}
