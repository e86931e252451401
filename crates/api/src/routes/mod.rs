pub mod calendar;
pub mod employee;
pub mod health;
pub mod project;
pub mod work_log;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list (?status)
/// /projects/{id}                                   project header
/// /projects/{id}/comments                          timeline (?timespan, start, end)
///
/// /calendar                                        month grid (?year, month)
/// /calendar/{date}                                 work logs for one day
///
/// /work-logs                                       create (POST)
///
/// /employees                                       list, create
/// /employees/{id}                                  delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/calendar", calendar::router())
        .nest("/work-logs", work_log::router())
        .nest("/employees", employee::router())
}
