//! Daily work logs.

use serde::{Deserialize, Serialize};

use crate::comment::Comment;
use crate::error::CoreError;
use crate::types::EntityId;

/// What one employee did on one project on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLog {
    pub id: EntityId,
    /// Calendar day (`YYYY-MM-DD`).
    pub date: String,
    pub employee_id: EntityId,
    pub project_id: EntityId,
    pub comments: Vec<Comment>,
}

/// Presence checks for a new work log.
pub fn validate_new_work_log(
    employee_id: &str,
    project_id: &str,
    comment: &str,
) -> Result<(), CoreError> {
    if employee_id.trim().is_empty() {
        return Err(CoreError::Validation("An employee must be selected".to_string()));
    }
    if project_id.trim().is_empty() {
        return Err(CoreError::Validation("A project must be selected".to_string()));
    }
    if comment.trim().is_empty() {
        return Err(CoreError::Validation("Work log comment cannot be empty".to_string()));
    }
    Ok(())
}

/// Logs recorded on `date_key`, in collection order.
pub fn logs_for_date<'a>(logs: &'a [WorkLog], date_key: &str) -> Vec<&'a WorkLog> {
    logs.iter().filter(|log| log.date == date_key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn log(id: &str, date: &str) -> WorkLog {
        WorkLog {
            id: id.to_string(),
            date: date.to_string(),
            employee_id: "1".to_string(),
            project_id: "p1".to_string(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn presence_checks_name_the_missing_field() {
        assert!(validate_new_work_log("1", "p1", "Fixed the build").is_ok());
        assert_matches!(
            validate_new_work_log("", "p1", "x"),
            Err(CoreError::Validation(msg)) if msg.contains("employee")
        );
        assert_matches!(
            validate_new_work_log("1", " ", "x"),
            Err(CoreError::Validation(msg)) if msg.contains("project")
        );
        assert_matches!(
            validate_new_work_log("1", "p1", "\n"),
            Err(CoreError::Validation(msg)) if msg.contains("comment")
        );
    }

    #[test]
    fn logs_for_date_matches_exact_key() {
        let logs = vec![log("w1", "2025-03-10"), log("w2", "2025-03-10"), log("w3", "2025-03-09")];
        let ids: Vec<&str> = logs_for_date(&logs, "2025-03-10")
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["w1", "w2"]);
        assert!(logs_for_date(&logs, "2025-03-11").is_empty());
    }
}
