//! Route definitions for projects.
//!
//! Mounted at `/projects` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// GET    /                   -> list_projects (?status)
/// GET    /{id}               -> get_project
/// GET    /{id}/comments      -> list_project_comments (?timespan, start, end)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list_projects))
        .route("/{id}", get(project::get_project))
        .route("/{id}/comments", get(project::list_project_comments))
}
