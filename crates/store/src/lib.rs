//! In-memory data store for the projectdesk dashboard.
//!
//! [`DataStore`] owns every collection. Repositories are zero-sized structs
//! whose methods take the store as their first argument, reading through
//! `&DataStore` and mutating through `&mut DataStore`.

pub mod models;
pub mod repositories;
pub mod seed;

use projectdesk_core::comment::Comment;
use projectdesk_core::employee::Employee;
use projectdesk_core::project::Project;
use projectdesk_core::work_log::WorkLog;

/// Every collection the dashboard reads, held in memory.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    pub employees: Vec<Employee>,
    pub projects: Vec<Project>,
    pub comments: Vec<Comment>,
    pub work_logs: Vec<WorkLog>,
}

impl DataStore {
    /// A store loaded with the bundled sample data.
    pub fn seeded() -> Self {
        Self {
            employees: seed::employees(),
            projects: seed::projects(),
            comments: seed::comments(),
            work_logs: seed::work_logs(),
        }
    }
}
