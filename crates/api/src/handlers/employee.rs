//! Handlers for the employee roster.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use projectdesk_core::employee::{roster_stats, Employee, RosterStats, OFFERED_ROLES};
use projectdesk_core::error::CoreError;
use projectdesk_core::types::EntityId;
use projectdesk_store::models::employee::CreateEmployee;
use projectdesk_store::repositories::EmployeeRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Roster {
    pub employees: Vec<Employee>,
    pub stats: RosterStats,
    /// Roles a form should offer. Stored roles are free text.
    pub offered_roles: &'static [&'static str],
}

/// GET /employees
pub async fn list_employees(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    let employees = EmployeeRepo::list(&store);

    Ok(Json(DataResponse {
        data: Roster {
            stats: roster_stats(employees),
            employees: employees.to_vec(),
            offered_roles: OFFERED_ROLES,
        },
    }))
}

/// POST /employees
///
/// Add an employee. Name, email, and role are all required.
pub async fn create_employee(
    State(state): State<AppState>,
    input: Result<Json<CreateEmployee>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = input?;
    let mut store = state.store.write().await;
    let employee = EmployeeRepo::create(&mut store, &input)?;

    tracing::info!(
        employee_id = %employee.id,
        role = %employee.role,
        "Employee created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: employee })))
}

/// DELETE /employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    let mut store = state.store.write().await;
    if !EmployeeRepo::delete(&mut store, &id) {
        return Err(CoreError::NotFound {
            entity: "Employee",
            id,
        }
        .into());
    }

    tracing::info!(employee_id = %id, "Employee deleted");

    Ok(StatusCode::NO_CONTENT)
}
