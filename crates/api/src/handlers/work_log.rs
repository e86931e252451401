//! Handlers for recording work logs, plus the resolved work log view
//! shared with the calendar.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use projectdesk_core::comment::format_time_label;
use projectdesk_core::employee::find_employee;
use projectdesk_core::project::find_project;
use projectdesk_core::types::EntityId;
use projectdesk_core::work_log::WorkLog;
use projectdesk_store::models::work_log::CreateWorkLog;
use projectdesk_store::repositories::WorkLogRepo;
use projectdesk_store::DataStore;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct EmployeeRef {
    pub id: EntityId,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectRef {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct WorkLogComment {
    pub id: EntityId,
    pub text: String,
    pub timestamp: String,
    pub time_label: Option<String>,
}

/// A work log with its employee and project resolved. Either reference
/// is `None` when its id no longer matches anything.
#[derive(Debug, Serialize)]
pub struct WorkLogDetail {
    pub id: EntityId,
    pub date: String,
    pub employee_id: EntityId,
    pub project_id: EntityId,
    pub employee: Option<EmployeeRef>,
    pub project: Option<ProjectRef>,
    pub comments: Vec<WorkLogComment>,
}

pub fn work_log_detail(store: &DataStore, log: &WorkLog) -> WorkLogDetail {
    WorkLogDetail {
        id: log.id.clone(),
        date: log.date.clone(),
        employee_id: log.employee_id.clone(),
        project_id: log.project_id.clone(),
        employee: find_employee(&store.employees, &log.employee_id).map(|e| EmployeeRef {
            id: e.id.clone(),
            name: e.name.clone(),
            role: e.role.clone(),
        }),
        project: find_project(&store.projects, &log.project_id).map(|p| ProjectRef {
            id: p.id.clone(),
            name: p.name.clone(),
        }),
        comments: log
            .comments
            .iter()
            .map(|c| WorkLogComment {
                id: c.id.clone(),
                text: c.text.clone(),
                timestamp: c.timestamp.clone(),
                time_label: c.parsed_timestamp().map(format_time_label),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /work-logs
///
/// Record what an employee worked on. Employee, project, and comment are
/// required; the date defaults to today.
pub async fn create_work_log(
    State(state): State<AppState>,
    input: Result<Json<CreateWorkLog>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = input?;
    let now = state.now();
    let mut store = state.store.write().await;
    let log = WorkLogRepo::create(&mut store, &input, now)?;

    tracing::info!(
        work_log_id = %log.id,
        employee_id = %log.employee_id,
        project_id = %log.project_id,
        date = %log.date,
        "Work log created"
    );

    let detail = work_log_detail(&store, &log);
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}
