//! Timespan filtering for project comments.
//!
//! A [`TimespanSelector`] names a window relative to "now" (or an explicit
//! custom window). [`compute_range`] turns it into an inclusive
//! [`DateRange`]; [`filter_comments`] keeps the comments inside it.
//!
//! Nothing here fails loudly:
//!
//! - `all`, or `custom` with a missing or unparseable bound, means no
//!   filtering at all.
//! - A comment whose timestamp does not parse is excluded from every
//!   bounded window.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::comment::Comment;
use crate::types::{end_of_day, parse_date, shift_days, start_of_day, Timestamp};

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// Which window of comments to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimespanSelector {
    #[default]
    All,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    Custom,
}

impl TimespanSelector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::ThisWeek => "this-week",
            Self::LastWeek => "last-week",
            Self::ThisMonth => "this-month",
            Self::LastMonth => "last-month",
            Self::Custom => "custom",
        }
    }

    /// Parse a selector string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "this-week" => Some(Self::ThisWeek),
            "last-week" => Some(Self::LastWeek),
            "this-month" => Some(Self::ThisMonth),
            "last-month" => Some(Self::LastMonth),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Time",
            Self::ThisWeek => "This Week",
            Self::LastWeek => "Last Week",
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
            Self::Custom => "Custom Range",
        }
    }

    /// All valid selector values, in menu order.
    pub const ALL: &'static [&'static str] = &[
        "all",
        "this-week",
        "last-week",
        "this-month",
        "last-month",
        "custom",
    ];
}

impl std::fmt::Display for TimespanSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Ranges
// ---------------------------------------------------------------------------

/// Explicit bounds for [`TimespanSelector::Custom`], as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl CustomRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }
}

/// A window of time, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DateRange {
    pub fn contains(&self, ts: Timestamp) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// Compute the window a selector covers at `now`.
///
/// Returns `None` when no filtering should happen.
pub fn compute_range(
    selector: TimespanSelector,
    now: Timestamp,
    custom: &CustomRange,
) -> Option<DateRange> {
    let today = now.date();
    match selector {
        TimespanSelector::All => None,
        TimespanSelector::ThisWeek => Some(DateRange {
            start: start_of_day(week_start(today)?)?,
            end: now,
        }),
        TimespanSelector::LastWeek => {
            let saturday = shift_days(week_start(today)?, -1)?;
            Some(DateRange {
                start: start_of_day(shift_days(saturday, -6)?)?,
                end: end_of_day(saturday)?,
            })
        }
        TimespanSelector::ThisMonth => Some(DateRange {
            start: start_of_day(month_start(today)?)?,
            end: now,
        }),
        TimespanSelector::LastMonth => {
            let last_day = month_start(today)?.pred_opt()?;
            Some(DateRange {
                start: start_of_day(month_start(last_day)?)?,
                end: end_of_day(last_day)?,
            })
        }
        TimespanSelector::Custom => {
            let start = parse_bound(custom.start.as_deref())?;
            let end = parse_bound(custom.end.as_deref())?;
            Some(DateRange {
                start: start_of_day(start)?,
                end: end_of_day(end)?,
            })
        }
    }
}

/// Keep the comments whose timestamp falls inside the selected window.
///
/// Input order is preserved. With no window the input is returned as is.
pub fn filter_comments(
    comments: &[Comment],
    selector: TimespanSelector,
    now: Timestamp,
    custom: &CustomRange,
) -> Vec<Comment> {
    match compute_range(selector, now, custom) {
        None => comments.to_vec(),
        Some(range) => comments
            .iter()
            .filter(|c| c.parsed_timestamp().is_some_and(|ts| range.contains(ts)))
            .cloned()
            .collect(),
    }
}

/// The Sunday on or before `date`.
fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    shift_days(date, -i64::from(date.weekday().num_days_from_sunday()))
}

fn month_start(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

fn parse_bound(value: Option<&str>) -> Option<NaiveDate> {
    value.filter(|v| !v.trim().is_empty()).and_then(parse_date)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
