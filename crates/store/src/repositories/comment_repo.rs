//! Repository for project comments.

use projectdesk_core::comment::Comment;
use projectdesk_core::project::comments_for_project;

use crate::DataStore;

/// Read access to the comment collection.
pub struct CommentRepo;

impl CommentRepo {
    /// Comments attached to a project, in collection order.
    pub fn list_by_project(store: &DataStore, project_id: &str) -> Vec<Comment> {
        comments_for_project(&store.comments, project_id)
            .into_iter()
            .cloned()
            .collect()
    }
}
