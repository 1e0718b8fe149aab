//! Dashboard read model.
//!
//! Recent tasks and projects are ranked by `created_at`, recent notes by
//! `updated_at`.

use crate::model::analytics::Analytics;
use crate::model::note::Note;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::repo::analytics_repo::AnalyticsRepository;
use crate::repo::note_repo::NoteRepository;
use crate::repo::project_repo::ProjectRepository;
use crate::repo::task_repo::TaskRepository;
use crate::service::sort_newest_first;
use crate::store::StoreResult;

pub const RECENT_TASKS_LIMIT: usize = 5;
pub const RECENT_PROJECTS_LIMIT: usize = 3;
pub const RECENT_NOTES_LIMIT: usize = 3;

/// Landing-page snapshot across every collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Newest non-archived tasks.
    pub recent_tasks: Vec<Task>,
    pub recent_projects: Vec<Project>,
    pub recent_notes: Vec<Note>,
    /// All projects in insertion order, for project pickers.
    pub projects: Vec<Project>,
    pub analytics: Analytics,
}

/// Builds the dashboard snapshot.
///
/// Each collection is read independently; the snapshot is not atomic
/// across collections.
pub fn build_dashboard(
    tasks: &impl TaskRepository,
    projects: &impl ProjectRepository,
    notes: &impl NoteRepository,
    analytics: &impl AnalyticsRepository,
) -> StoreResult<Dashboard> {
    let mut recent_tasks = tasks.list_tasks()?;
    recent_tasks.retain(|task| !task.archived);
    sort_newest_first(&mut recent_tasks, |task| task.created_at.as_str());
    recent_tasks.truncate(RECENT_TASKS_LIMIT);

    let all_projects = projects.list_projects()?;
    let mut recent_projects = all_projects.clone();
    sort_newest_first(&mut recent_projects, |project| project.created_at.as_str());
    recent_projects.truncate(RECENT_PROJECTS_LIMIT);

    let mut recent_notes = notes.list_notes()?;
    sort_newest_first(&mut recent_notes, |note| note.updated_at.as_str());
    recent_notes.truncate(RECENT_NOTES_LIMIT);

    Ok(Dashboard {
        recent_tasks,
        recent_projects,
        recent_notes,
        projects: all_projects,
        analytics: analytics.get_analytics()?,
    })
}
