//! Route definitions for the work log calendar.

use axum::routing::get;
use axum::Router;

use crate::handlers::calendar;
use crate::state::AppState;

/// ```text
/// GET    /                   -> get_month (?year, month)
/// GET    /{date}             -> get_day
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(calendar::get_month))
        .route("/{date}", get(calendar::get_day))
}
