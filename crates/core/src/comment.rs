//! Project activity comments.
//!
//! `date` and `timestamp` are kept exactly as authored. They are parsed on
//! demand, and a value that fails to parse never raises: it simply drops
//! out of any date-bounded view.

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::types::{parse_date, parse_timestamp, EntityId, Timestamp};

/// A timestamped note attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: EntityId,
    pub author: String,
    /// Calendar day (`YYYY-MM-DD`). Used as the grouping key.
    pub date: String,
    pub text: String,
    pub project_id: EntityId,
    /// Exact date-time (`YYYY-MM-DDTHH:MM:SS`). Used for filtering and ordering.
    pub timestamp: String,
}

impl Comment {
    pub fn parsed_timestamp(&self) -> Option<Timestamp> {
        parse_timestamp(&self.timestamp)
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Whether `date` is the calendar day of `timestamp`. Both must parse.
    pub fn date_matches_timestamp(&self) -> bool {
        match (self.parsed_date(), self.parsed_timestamp()) {
            (Some(date), Some(ts)) => ts.date() == date,
            _ => false,
        }
    }
}

/// Initials for an author avatar: the first letter of each word, uppercased.
///
/// `"Sarah Johnson"` becomes `"SJ"`.
pub fn author_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Render the time of day as a 12-hour label, e.g. `"02:20 PM"`.
pub fn format_time_label(ts: Timestamp) -> String {
    let (is_pm, hour) = ts.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    format!("{hour:02}:{:02} {suffix}", ts.minute())
}
