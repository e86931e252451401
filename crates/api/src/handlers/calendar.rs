//! Handlers for the work log calendar.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use projectdesk_core::calendar::{
    build_month, next_month, previous_month, CalendarDay, DAY_PREVIEW_LIMIT, WEEKDAY_HEADERS,
};
use projectdesk_core::employee::find_employee;
use projectdesk_core::grouping::format_group_label;
use projectdesk_core::project::find_project;
use projectdesk_core::types::{format_date_key, parse_date, EntityId};
use projectdesk_store::repositories::WorkLogRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::work_log::{work_log_detail, WorkLogDetail};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /calendar`. Both default to the current month.
#[derive(Debug, Deserialize)]
pub struct MonthParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

/// Short line shown inside a day cell.
#[derive(Debug, Serialize)]
pub struct WorkLogPreview {
    pub id: EntityId,
    pub employee_name: Option<String>,
    pub project_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalendarDayView {
    #[serde(flatten)]
    pub day: CalendarDay,
    pub preview: Vec<WorkLogPreview>,
}

#[derive(Debug, Serialize)]
pub struct CalendarMonthView {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub weekday_headers: [&'static str; 7],
    pub leading_blank_days: u32,
    pub days: Vec<CalendarDayView>,
    pub previous: MonthRef,
    pub next: MonthRef,
}

#[derive(Debug, Serialize)]
pub struct DayWorkLogs {
    pub date: String,
    pub label: String,
    pub work_logs: Vec<WorkLogDetail>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /calendar?year=&month=
pub async fn get_month(
    State(state): State<AppState>,
    params: Result<Query<MonthParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let today = state.now().date();
    let year = params.year.unwrap_or_else(|| today.year());
    let month = params.month.unwrap_or_else(|| today.month());

    let store = state.store.read().await;
    let grid = build_month(year, month, today, WorkLogRepo::list(&store))?;

    let days = grid
        .days
        .into_iter()
        .map(|day| {
            let preview = WorkLogRepo::list_by_date(&store, &day.date)
                .into_iter()
                .take(DAY_PREVIEW_LIMIT)
                .map(|log| WorkLogPreview {
                    id: log.id.clone(),
                    employee_name: find_employee(&store.employees, &log.employee_id)
                        .map(|e| e.name.clone()),
                    project_name: find_project(&store.projects, &log.project_id)
                        .map(|p| p.name.clone()),
                })
                .collect();
            CalendarDayView { day, preview }
        })
        .collect();

    let (prev_year, prev_month) = previous_month(year, month);
    let (following_year, following_month) = next_month(year, month);

    Ok(Json(DataResponse {
        data: CalendarMonthView {
            year: grid.year,
            month: grid.month,
            month_name: grid.month_name,
            weekday_headers: WEEKDAY_HEADERS,
            leading_blank_days: grid.leading_blank_days,
            days,
            previous: MonthRef {
                year: prev_year,
                month: prev_month,
            },
            next: MonthRef {
                year: following_year,
                month: following_month,
            },
        },
    }))
}

/// GET /calendar/{date}
///
/// Every work log recorded on one day, with references resolved.
pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<impl IntoResponse> {
    let date = parse_date(&date).map(format_date_key).ok_or_else(|| {
        AppError::BadRequest(format!("Invalid date '{date}'. Expected YYYY-MM-DD"))
    })?;

    let store = state.store.read().await;
    let work_logs = WorkLogRepo::list_by_date(&store, &date)
        .into_iter()
        .map(|log| work_log_detail(&store, log))
        .collect();

    Ok(Json(DataResponse {
        data: DayWorkLogs {
            label: format_group_label(&date),
            date,
            work_logs,
        },
    }))
}
