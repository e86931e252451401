//! Repository for projects.

use projectdesk_core::project::{find_project, Project};

use crate::DataStore;

/// Read access to projects. Projects are fixed at startup.
pub struct ProjectRepo;

impl ProjectRepo {
    /// All projects in seed order.
    pub fn list(store: &DataStore) -> &[Project] {
        &store.projects
    }

    pub fn find_by_id<'a>(store: &'a DataStore, id: &str) -> Option<&'a Project> {
        find_project(&store.projects, id)
    }
}
