//! Route definitions for the employee roster.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// ```text
/// GET    /                   -> list_employees
/// POST   /                   -> create_employee
/// DELETE /{id}               -> delete_employee
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employee::list_employees).post(employee::create_employee),
        )
        .route("/{id}", delete(employee::delete_employee))
}
