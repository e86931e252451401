//! Project status, dashboard filtering, and comment aggregates.

use serde::{Deserialize, Serialize};

use crate::comment::Comment;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of recent comments shown on a project card.
pub const CARD_PREVIEW_LIMIT: usize = 2;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    NotStarted,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::NotStarted => "not-started",
        }
    }

    /// Parse a status string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "not-started" => Some(Self::NotStarted),
            _ => None,
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::NotStarted => "Not Started",
        }
    }

    /// All valid status values.
    pub const ALL: &'static [&'static str] = &["active", "completed", "not-started"];
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Seeded aggregate. May disagree with the comment collection; views
    /// use [`live_comment_count`] instead.
    pub comment_count: u32,
    pub team_size: u32,
    pub recent_comments: Vec<Comment>,
}

/// Look up a project by id.
pub fn find_project<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id == id)
}

/// Comments that belong to `project_id`, in collection order.
pub fn comments_for_project<'a>(comments: &'a [Comment], project_id: &str) -> Vec<&'a Comment> {
    comments.iter().filter(|c| c.project_id == project_id).collect()
}

/// Number of comments currently attached to `project_id`.
pub fn live_comment_count(comments: &[Comment], project_id: &str) -> usize {
    comments.iter().filter(|c| c.project_id == project_id).count()
}

/// First [`CARD_PREVIEW_LIMIT`] entries of the project's preview list.
pub fn card_preview(project: &Project) -> &[Comment] {
    let end = project.recent_comments.len().min(CARD_PREVIEW_LIMIT);
    &project.recent_comments[..end]
}

// ---------------------------------------------------------------------------
// Dashboard status filter
// ---------------------------------------------------------------------------

/// Dashboard filter: every project, or only those with one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
    NotStarted,
}

impl StatusFilter {
    pub fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == ProjectStatus::Active,
            Self::Completed => status == ProjectStatus::Completed,
            Self::NotStarted => status == ProjectStatus::NotStarted,
        }
    }
}

/// Projects matching the filter, in their original order.
pub fn filter_by_status(projects: &[Project], filter: StatusFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p.status)).collect()
}

/// Per-status totals for the filter buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
    pub not_started: usize,
}

pub fn count_by_status(projects: &[Project]) -> StatusCounts {
    projects
        .iter()
        .fold(StatusCounts::default(), |mut counts, project| {
            counts.all += 1;
            match project.status {
                ProjectStatus::Active => counts.active += 1,
                ProjectStatus::Completed => counts.completed += 1,
                ProjectStatus::NotStarted => counts.not_started += 1,
            }
            counts
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, project_id: &str) -> Comment {
        Comment {
            id: id.to_string(),
            author: "James Brown".to_string(),
            date: "2025-03-08".to_string(),
            text: "Implemented the dashboard API endpoints".to_string(),
            project_id: project_id.to_string(),
            timestamp: "2025-03-08T16:45:00".to_string(),
        }
    }

    fn project(id: &str, status: ProjectStatus, recent: Vec<Comment>) -> Project {
        Project {
            id: id.to_string(),
            name: format!("Project {id}"),
            description: String::new(),
            status,
            comment_count: 99,
            team_size: 3,
            recent_comments: recent,
        }
    }

    #[test]
    fn status_strings_round_trip() {
        for s in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_str(s).unwrap().as_str(), *s);
        }
        assert_eq!(ProjectStatus::from_str("archived"), None);
    }

    #[test]
    fn status_labels() {
        assert_eq!(ProjectStatus::Active.label(), "Active");
        assert_eq!(ProjectStatus::NotStarted.label(), "Not Started");
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not-started\"");
    }

    #[test]
    fn live_count_ignores_seeded_aggregate() {
        let comments = vec![comment("a", "p1"), comment("b", "p2"), comment("c", "p1")];
        assert_eq!(live_comment_count(&comments, "p1"), 2);
        assert_eq!(live_comment_count(&comments, "p9"), 0);
        assert_eq!(comments_for_project(&comments, "p2").len(), 1);
    }

    #[test]
    fn card_preview_is_bounded() {
        let p = project(
            "p1",
            ProjectStatus::Active,
            vec![comment("a", "p1"), comment("b", "p1"), comment("c", "p1")],
        );
        let ids: Vec<&str> = card_preview(&p).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let empty = project("p3", ProjectStatus::NotStarted, vec![]);
        assert!(card_preview(&empty).is_empty());
    }

    #[test]
    fn filter_and_count_by_status() {
        let projects = vec![
            project("p1", ProjectStatus::Active, vec![]),
            project("p2", ProjectStatus::Completed, vec![]),
            project("p3", ProjectStatus::Active, vec![]),
            project("p4", ProjectStatus::NotStarted, vec![]),
        ];
        let active: Vec<&str> = filter_by_status(&projects, StatusFilter::Active)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(active, vec!["p1", "p3"]);
        assert_eq!(filter_by_status(&projects, StatusFilter::All).len(), 4);

        assert_eq!(
            count_by_status(&projects),
            StatusCounts {
                all: 4,
                active: 2,
                completed: 1,
                not_started: 1,
            }
        );
    }

    #[test]
    fn find_project_returns_none_for_dangling_id() {
        let projects = vec![project("p1", ProjectStatus::Active, vec![])];
        assert!(find_project(&projects, "p1").is_some());
        assert!(find_project(&projects, "missing").is_none());
    }
}
