//! Input DTOs for store mutations.

pub mod employee;
pub mod work_log;
