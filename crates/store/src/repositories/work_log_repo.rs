//! Repository for daily work logs.

use projectdesk_core::comment::Comment;
use projectdesk_core::employee::find_employee;
use projectdesk_core::error::CoreError;
use projectdesk_core::types::{format_date_key, parse_date, Timestamp};
use projectdesk_core::work_log::{logs_for_date, validate_new_work_log, WorkLog};
use validator::Validate;

use crate::models::work_log::CreateWorkLog;
use crate::repositories::validation_error;
use crate::DataStore;

/// Author recorded when a work log's employee id does not resolve.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Work log reads plus add. There is no update or delete.
pub struct WorkLogRepo;

impl WorkLogRepo {
    pub fn list(store: &DataStore) -> &[WorkLog] {
        &store.work_logs
    }

    pub fn list_by_date<'a>(store: &'a DataStore, date_key: &str) -> Vec<&'a WorkLog> {
        logs_for_date(&store.work_logs, date_key)
    }

    /// Record a work log at `now`.
    ///
    /// The log's comment is also appended to the comment collection so the
    /// project's activity timeline shows it. A missing `date` defaults to
    /// the day of `now`; the comment's timestamp is that day at the time
    /// of `now`. A date given with unpadded or padded digits is normalised
    /// to its `YYYY-MM-DD` key.
    pub fn create(
        store: &mut DataStore,
        input: &CreateWorkLog,
        now: Timestamp,
    ) -> Result<WorkLog, CoreError> {
        input.validate().map_err(validation_error)?;
        validate_new_work_log(&input.employee_id, &input.project_id, &input.comment)?;

        let date = match input.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            None => format_date_key(now.date()),
            Some(raw) => match parse_date(raw) {
                Some(parsed) => format_date_key(parsed),
                // Kept as sent; the log then matches no calendar day and its
                // comment sorts after every dated group.
                None => {
                    tracing::warn!(date = %raw, "Work log date does not parse, storing as sent");
                    raw.to_string()
                }
            },
        };

        let author = find_employee(&store.employees, &input.employee_id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        let comment = Comment {
            id: uuid::Uuid::new_v4().to_string(),
            author,
            timestamp: format!("{date}T{}", now.format("%H:%M:%S")),
            date: date.clone(),
            text: input.comment.trim().to_string(),
            project_id: input.project_id.clone(),
        };

        let log = WorkLog {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            employee_id: input.employee_id.clone(),
            project_id: input.project_id.clone(),
            comments: vec![comment.clone()],
        };

        let mut comments = store.comments.clone();
        comments.push(comment);
        store.comments = comments;

        let mut work_logs = store.work_logs.clone();
        work_logs.push(log.clone());
        store.work_logs = work_logs;

        tracing::debug!(
            work_log_id = %log.id,
            employee_id = %log.employee_id,
            project_id = %log.project_id,
            date = %log.date,
            "Work log added to store"
        );
        Ok(log)
    }
}
