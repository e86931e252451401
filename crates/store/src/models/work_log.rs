//! Work log input model.

use serde::Deserialize;
use validator::Validate;

/// DTO for recording a work log.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkLog {
    /// `YYYY-MM-DD`. Defaults to today when omitted.
    pub date: Option<String>,
    #[validate(length(min = 1, message = "employee_id is required"))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "project_id is required"))]
    pub project_id: String,
    #[validate(length(min = 1, message = "comment is required"))]
    pub comment: String,
}
