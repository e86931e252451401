use axum::routing::post;
use axum::Router;

use crate::handlers::work_log;
use crate::state::AppState;

/// ```text
/// POST   /                   -> create_work_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(work_log::create_work_log))
}
