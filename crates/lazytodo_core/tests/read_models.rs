use lazytodo_core::{
    Analytics, Collection, NewProject, NewTask, Note, Project, Task, Workspace, WorkspaceConfig,
};
use tempfile::TempDir;

fn open_workspace() -> (TempDir, Workspace) {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::open(WorkspaceConfig::new(dir.path())).unwrap();
    (dir, workspace)
}

fn stamp(day: u32) -> String {
    format!("2024-01-{day:02}T00:00:00.000Z")
}

fn task_on(id: &str, day: u32, archived: bool) -> Task {
    let mut input = NewTask::titled(id);
    input.archived = archived;
    Task::from_new(input, id.to_string(), stamp(day))
}

fn project_on(id: &str, day: u32) -> Project {
    Project::from_new(NewProject::titled(id), id.to_string(), stamp(day))
}

fn note_updated_on(id: &str, day: u32) -> Note {
    let mut note = Note::from_new(Default::default(), id.to_string(), stamp(1));
    note.title = id.to_string();
    note.updated_at = stamp(day);
    note
}

fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|item| id(item).to_string()).collect()
}

#[test]
fn active_and_archived_views_are_newest_first() {
    let (_dir, workspace) = open_workspace();
    let tasks = vec![
        task_on("old", 1, false),
        task_on("archived-old", 2, true),
        task_on("new", 5, false),
        task_on("archived-new", 6, true),
        task_on("mid", 3, false),
    ];
    workspace.store().save(Collection::Tasks, &tasks).unwrap();

    let active = workspace.list_active_tasks().unwrap();
    assert_eq!(ids(&active, |t| t.id.as_str()), vec!["new", "mid", "old"]);

    let archived = workspace.list_archived_tasks().unwrap();
    assert_eq!(ids(&archived, |t| t.id.as_str()), vec!["archived-new", "archived-old"]);
}

#[test]
fn toggle_and_archive_shortcuts_update_analytics() {
    let (_dir, workspace) = open_workspace();
    let task = workspace.create_task(NewTask::titled("toggle")).unwrap();

    let on = workspace.toggle_task_completed(&task.id).unwrap().unwrap();
    assert!(on.completed);
    let off = workspace.toggle_task_completed(&task.id).unwrap().unwrap();
    assert!(!off.completed);
    let archived = workspace.archive_task(&task.id).unwrap().unwrap();
    assert!(archived.archived);

    let analytics = workspace.get_analytics().unwrap();
    assert_eq!(analytics.tasks_completed, 1);
    assert_eq!(analytics.tasks_archived, 1);
    assert!(workspace.toggle_task_completed("missing").unwrap().is_none());
    assert!(workspace.archive_task("missing").unwrap().is_none());
}

#[test]
fn note_items_are_sorted_by_last_update() {
    let (_dir, workspace) = open_workspace();
    let notes = vec![
        note_updated_on("a", 2),
        note_updated_on("b", 9),
        note_updated_on("c", 4),
    ];
    workspace.store().save(Collection::Notes, &notes).unwrap();

    let items = workspace.list_note_items().unwrap();
    assert_eq!(ids(&items, |item| item.id.as_str()), vec!["b", "c", "a"]);
    assert_eq!(items[0].title, "b");
}

#[test]
fn dashboard_limits_and_orders_each_section() {
    let (_dir, workspace) = open_workspace();
    let mut tasks: Vec<Task> = (1..=7)
        .map(|day| task_on(&format!("t{day}"), day, false))
        .collect();
    tasks.push(task_on("archived", 20, true));
    let projects: Vec<Project> = (1..=4).map(|day| project_on(&format!("p{day}"), day)).collect();
    let notes: Vec<Note> = (1..=4)
        .map(|day| note_updated_on(&format!("n{day}"), day))
        .collect();
    let store = workspace.store();
    store.save(Collection::Tasks, &tasks).unwrap();
    store.save(Collection::Projects, &projects).unwrap();
    store.save(Collection::Notes, &notes).unwrap();

    let dashboard = workspace.dashboard().unwrap();
    assert_eq!(
        ids(&dashboard.recent_tasks, |t| t.id.as_str()),
        vec!["t7", "t6", "t5", "t4", "t3"]
    );
    assert_eq!(
        ids(&dashboard.recent_projects, |p| p.id.as_str()),
        vec!["p4", "p3", "p2"]
    );
    assert_eq!(
        ids(&dashboard.recent_notes, |n| n.id.as_str()),
        vec!["n4", "n3", "n2"]
    );
    assert_eq!(ids(&dashboard.projects, |p| p.id.as_str()), vec!["p1", "p2", "p3", "p4"]);
    let analytics: Analytics = workspace.get_analytics().unwrap();
    assert_eq!(dashboard.analytics, analytics);
}
