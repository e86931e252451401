//! Month calendar of work logs.
//!
//! Builds the grid model for one month: blank leading cells so the 1st
//! lands under its weekday, then one cell per day with its work log count.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::format_date_key;
use crate::work_log::WorkLog;

/// Work logs previewed inside a day cell before the "+N more" overflow.
pub const DAY_PREVIEW_LIMIT: usize = 2;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: String,
    pub day: u32,
    pub work_log_count: usize,
    /// Logs beyond [`DAY_PREVIEW_LIMIT`].
    pub overflow_count: usize,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    pub month_name: &'static str,
    /// Empty cells before the 1st (0 when the month starts on Sunday).
    pub leading_blank_days: u32,
    pub days: Vec<CalendarDay>,
}

/// Build the grid for `month` (1..=12) of `year`.
pub fn build_month(
    year: i32,
    month: u32,
    today: NaiveDate,
    logs: &[WorkLog],
) -> Result<CalendarMonth, CoreError> {
    let first = first_of_month(year, month)?;
    let days_in_month = days_in_month(first)?;

    let days = (1..=days_in_month)
        .filter_map(|day| first.with_day(day))
        .map(|date| {
            let key = format_date_key(date);
            let work_log_count = logs.iter().filter(|log| log.date == key).count();
            CalendarDay {
                day: date.day(),
                work_log_count,
                overflow_count: work_log_count.saturating_sub(DAY_PREVIEW_LIMIT),
                is_today: date == today,
                date: key,
            }
        })
        .collect();

    Ok(CalendarMonth {
        year,
        month,
        month_name: MONTH_NAMES[first.month0() as usize],
        leading_blank_days: first.weekday().num_days_from_sunday(),
        days,
    })
}

/// The month before `(year, month)`, rolling back across January.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The month after `(year, month)`, rolling over after December.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CoreError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        CoreError::Validation(format!("Invalid calendar month {year}-{month:02}"))
    })
}

fn days_in_month(first: NaiveDate) -> Result<u32, CoreError> {
    let (year, month) = next_month(first.year(), first.month());
    let next_first = first_of_month(year, month)?;
    next_first
        .pred_opt()
        .map(|last| last.day())
        .ok_or_else(|| CoreError::Internal("calendar date out of range".to_string()))
}
