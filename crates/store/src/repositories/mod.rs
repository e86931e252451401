//! Repository layer.
//!
//! Each repository is a zero-sized struct providing methods that accept
//! the [`DataStore`](crate::DataStore) as the first argument.

pub mod comment_repo;
pub mod employee_repo;
pub mod project_repo;
pub mod work_log_repo;

pub use comment_repo::CommentRepo;
pub use employee_repo::EmployeeRepo;
pub use project_repo::ProjectRepo;
pub use work_log_repo::WorkLogRepo;

use projectdesk_core::error::CoreError;
use validator::ValidationErrors;

/// Flatten `validator` failures into a single validation message.
pub(crate) fn validation_error(errors: ValidationErrors) -> CoreError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    messages.sort();
    CoreError::Validation(messages.join(", "))
}
