//! Handlers for the project dashboard and project activity timeline.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use projectdesk_core::comment::{author_initials, format_time_label, Comment};
use projectdesk_core::employee::find_employee_by_name;
use projectdesk_core::error::CoreError;
use projectdesk_core::grouping::{comment_count_label, format_group_label, group_by_date};
use projectdesk_core::project::{
    card_preview, count_by_status, filter_by_status, live_comment_count, Project,
    ProjectStatus, StatusCounts, StatusFilter,
};
use projectdesk_core::timespan::{
    compute_range, filter_comments, CustomRange, DateRange, TimespanSelector,
};
use projectdesk_core::types::EntityId;
use projectdesk_store::repositories::{CommentRepo, ProjectRepo};
use projectdesk_store::DataStore;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Empty-state text when a project has no comments at all.
pub const NO_COMMENTS_MESSAGE: &str = "No comments have been added to this project yet.";

/// Empty-state text when the selected window hides every comment.
pub const NO_COMMENTS_IN_TIMESPAN_MESSAGE: &str =
    "No comments found for the selected timespan. Try adjusting your filters.";

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    #[serde(default)]
    pub status: StatusFilter,
}

/// Query parameters for `GET /projects/{id}/comments`.
#[derive(Debug, Deserialize)]
pub struct CommentTimelineParams {
    #[serde(default)]
    pub timespan: TimespanSelector,
    pub start: Option<String>,
    pub end: Option<String>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A project as shown on a dashboard card.
#[derive(Debug, Serialize)]
pub struct ProjectCard {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub status_label: &'static str,
    pub comment_count: usize,
    pub team_size: u32,
    pub recent_comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct ProjectList {
    pub projects: Vec<ProjectCard>,
    pub counts: StatusCounts,
}

/// Header data for the project detail view.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub status_label: &'static str,
    pub comment_count: usize,
    pub team_size: u32,
}

/// One comment in the activity timeline, with its author resolved.
#[derive(Debug, Serialize)]
pub struct TimelineComment {
    pub id: EntityId,
    pub author: String,
    pub author_initials: String,
    /// `None` when the author is not on the roster.
    pub author_role: Option<String>,
    pub text: String,
    pub timestamp: String,
    /// `None` when the timestamp does not parse.
    pub time_label: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TimelineGroup {
    pub date: String,
    pub label: String,
    pub count_label: String,
    pub comments: Vec<TimelineComment>,
}

#[derive(Debug, Serialize)]
pub struct CommentTimeline {
    pub project_id: EntityId,
    pub timespan: TimespanSelector,
    pub timespan_label: &'static str,
    /// `None` when nothing was filtered out by date.
    pub range: Option<DateRange>,
    pub shown: usize,
    pub total: usize,
    pub groups: Vec<TimelineGroup>,
    pub empty_message: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /projects?status=
///
/// List project cards, optionally narrowed to one status.
pub async fn list_projects(
    State(state): State<AppState>,
    params: Result<Query<ProjectListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let store = state.store.read().await;

    let all = ProjectRepo::list(&store);
    let projects = filter_by_status(all, params.status)
        .into_iter()
        .map(|p| project_card(&store, p))
        .collect();

    Ok(Json(DataResponse {
        data: ProjectList {
            projects,
            counts: count_by_status(all),
        },
    }))
}

/// GET /projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    let project = find_project_or_404(&store, &id)?;

    Ok(Json(DataResponse {
        data: ProjectDetail {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status,
            status_label: project.status.label(),
            comment_count: live_comment_count(&store.comments, &project.id),
            team_size: project.team_size,
        },
    }))
}

/// GET /projects/{id}/comments?timespan=&start=&end=
///
/// The project's comments inside the selected window, grouped by day.
pub async fn list_project_comments(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    params: Result<Query<CommentTimelineParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let now = state.now();
    let store = state.store.read().await;
    let project = find_project_or_404(&store, &id)?;

    let custom = CustomRange {
        start: params.start,
        end: params.end,
    };
    let all_comments = CommentRepo::list_by_project(&store, &project.id);
    let filtered = filter_comments(&all_comments, params.timespan, now, &custom);

    let groups: Vec<TimelineGroup> = group_by_date(&filtered)
        .into_iter()
        .map(|group| TimelineGroup {
            label: format_group_label(&group.date),
            count_label: comment_count_label(group.comments.len()),
            comments: group
                .comments
                .into_iter()
                .map(|c| timeline_comment(&store, c))
                .collect(),
            date: group.date,
        })
        .collect();

    let empty_message = groups.is_empty().then_some(match params.timespan {
        TimespanSelector::All => NO_COMMENTS_MESSAGE,
        _ => NO_COMMENTS_IN_TIMESPAN_MESSAGE,
    });

    tracing::debug!(
        project_id = %project.id,
        timespan = %params.timespan,
        shown = filtered.len(),
        total = all_comments.len(),
        "Comment timeline computed"
    );

    Ok(Json(DataResponse {
        data: CommentTimeline {
            project_id: project.id.clone(),
            timespan: params.timespan,
            timespan_label: params.timespan.label(),
            range: compute_range(params.timespan, now, &custom),
            shown: filtered.len(),
            total: all_comments.len(),
            groups,
            empty_message,
        },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn find_project_or_404<'a>(store: &'a DataStore, id: &str) -> Result<&'a Project, CoreError> {
    ProjectRepo::find_by_id(store, id).ok_or_else(|| CoreError::NotFound {
        entity: "Project",
        id: id.to_string(),
    })
}

fn project_card(store: &DataStore, project: &Project) -> ProjectCard {
    ProjectCard {
        id: project.id.clone(),
        name: project.name.clone(),
        description: project.description.clone(),
        status: project.status,
        status_label: project.status.label(),
        comment_count: live_comment_count(&store.comments, &project.id),
        team_size: project.team_size,
        recent_comments: card_preview(project).to_vec(),
    }
}

fn timeline_comment(store: &DataStore, comment: Comment) -> TimelineComment {
    let author_role = find_employee_by_name(&store.employees, &comment.author).map(|e| e.role.clone());
    TimelineComment {
        author_initials: author_initials(&comment.author),
        author_role,
        time_label: comment.parsed_timestamp().map(format_time_label),
        id: comment.id,
        author: comment.author,
        text: comment.text,
        timestamp: comment.timestamp,
    }
}
