use lazytodo_core::{
    open_store, Analytics, Collection, JsonStore, NewNote, NewProject, NewTask, Note, Project,
    StoreError, Task, TaskPatch, Workspace, WorkspaceConfig,
};
use serde_json::json;
use std::fs;

#[test]
fn open_store_seeds_every_collection() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("data");
    let store = open_store(&root, false).unwrap();

    for collection in [Collection::Tasks, Collection::Projects, Collection::Notes] {
        let text = fs::read_to_string(store.path_of(collection)).unwrap();
        assert_eq!(text, "[]");
    }

    let analytics: Analytics = store.load(Collection::Analytics).unwrap();
    assert_eq!(analytics.tasks_created, 0);
    assert_eq!(analytics.tasks_completed, 0);
    assert_eq!(analytics.tasks_archived, 0);
    assert_eq!(analytics.projects_created, 0);
    assert_eq!(analytics.notes_created, 0);
    assert_eq!(analytics.task_completion_rate, 0.0);
    assert!(!analytics.last_updated.is_empty());
}

#[test]
fn reopening_never_overwrites_existing_documents() {
    let dir = tempfile::tempdir().unwrap();
    let first = Workspace::open(WorkspaceConfig::new(dir.path())).unwrap();
    let task = first.create_task(NewTask::titled("keep me")).unwrap();
    drop(first);

    let second = Workspace::open(WorkspaceConfig::new(dir.path())).unwrap();
    second.store().ensure_initialized().unwrap();
    let tasks = second.list_tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, task.id);
    assert_eq!(second.get_analytics().unwrap().tasks_created, 1);
}

#[test]
fn seeding_fills_in_only_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let notes = json!([{
        "id": "n-1",
        "title": "kept",
        "content": "body",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z"
    }]);
    fs::write(dir.path().join("notes.json"), notes.to_string()).unwrap();

    let workspace = Workspace::open(WorkspaceConfig::new(dir.path())).unwrap();
    let listed = workspace.list_notes().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "kept");
    assert!(workspace.list_tasks().unwrap().is_empty());
}

#[test]
fn lazy_workspace_initializes_on_first_call() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("lazy");
    let workspace = Workspace::open_lazy(WorkspaceConfig::new(&root));
    assert!(!root.exists());

    assert!(workspace.list_projects().unwrap().is_empty());
    assert!(root.join("tasks.json").exists());
    assert!(root.join("analytics.json").exists());
}

#[test]
fn deleted_collection_file_surfaces_not_initialized() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::open(WorkspaceConfig::new(dir.path())).unwrap();
    fs::remove_file(dir.path().join("tasks.json")).unwrap();

    let err = workspace.list_tasks().unwrap_err();
    assert!(matches!(err, StoreError::NotInitialized { .. }));
}

#[test]
fn analytics_document_missing_counters_still_counts() {
    let dir = tempfile::tempdir().unwrap();
    let partial = json!({
        "taskCompletionRate": 0.5,
        "tasksCompleted": 1,
        "tasksCreated": 2,
        "lastUpdated": "2024-01-01T00:00:00.000Z"
    });
    fs::write(dir.path().join("analytics.json"), partial.to_string()).unwrap();
    let workspace = Workspace::open(WorkspaceConfig::new(dir.path())).unwrap();

    workspace.create_task(NewTask::titled("x")).unwrap();
    workspace.create_note(NewNote::default()).unwrap();

    let analytics = workspace.get_analytics().unwrap();
    assert_eq!(analytics.tasks_created, 3);
    assert_eq!(analytics.tasks_completed, 1);
    assert_eq!(analytics.tasks_archived, 0);
    assert_eq!(analytics.projects_created, 0);
    assert_eq!(analytics.notes_created, 1);
    assert_eq!(workspace.list_tasks().unwrap().len(), 1);
}

#[test]
fn failed_save_reports_io_and_leaves_collection_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::open(WorkspaceConfig::new(dir.path())).unwrap();
    let task = workspace.create_task(NewTask::titled("stable")).unwrap();
    let tasks_path = dir.path().join("tasks.json");
    let before = fs::read(&tasks_path).unwrap();
    let analytics_before = workspace.get_analytics().unwrap();

    // A directory squatting on the temp path makes every task write fail.
    let blocker = dir.path().join("tasks.json.tmp");
    fs::create_dir(&blocker).unwrap();

    let err = workspace.create_task(NewTask::titled("lost")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }), "unexpected error: {err}");
    assert_eq!(err.code(), "store_io_failed");

    let err = workspace
        .update_task(&task.id, TaskPatch::completed(true))
        .unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));

    assert_eq!(fs::read(&tasks_path).unwrap(), before);
    let tasks = workspace.list_tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(!tasks[0].completed);
    assert_eq!(workspace.get_analytics().unwrap(), analytics_before);

    fs::remove_dir(&blocker).unwrap();
    workspace.create_task(NewTask::titled("after")).unwrap();
    assert_eq!(workspace.list_tasks().unwrap().len(), 2);
}

#[test]
fn save_of_load_keeps_stored_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::open(WorkspaceConfig::new(dir.path())).unwrap();
    let task = workspace
        .create_task(NewTask {
            title: "with extras".to_string(),
            description: Some(String::new()),
            project_id: Some("p-1".to_string()),
            ..NewTask::default()
        })
        .unwrap();
    workspace.add_comment(&task.id, "first").unwrap();
    workspace
        .create_project(NewProject::titled("plain project"))
        .unwrap();
    workspace
        .create_note(NewNote {
            title: "n".to_string(),
            content: "c".to_string(),
            tags: Some(Vec::new()),
        })
        .unwrap();

    let store: &JsonStore = workspace.store();
    assert_round_trip::<Vec<Task>>(store, Collection::Tasks);
    assert_round_trip::<Vec<Project>>(store, Collection::Projects);
    assert_round_trip::<Vec<Note>>(store, Collection::Notes);
    assert_round_trip::<Analytics>(store, Collection::Analytics);
}

#[test]
fn documents_from_earlier_versions_round_trip_losslessly() {
    let dir = tempfile::tempdir().unwrap();
    let tasks = json!([{
        "id": "t-1",
        "title": "legacy",
        "completed": true,
        "archived": false,
        "parentTaskId": "t-0",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-02T00:00:00.000Z",
        "comments": [{
            "id": "c-1",
            "content": "hi",
            "taskId": "t-1",
            "createdAt": "2024-01-01T00:00:01.000Z"
        }]
    }]);
    let projects = json!([{
        "id": "p-1",
        "title": "legacy project",
        "description": "",
        "mindMap": [
            {"id": "m-1", "content": "root", "children": ["m-2"]},
            {"id": "m-2", "content": "leaf"}
        ],
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "tasks": []
    }]);
    fs::write(dir.path().join("tasks.json"), tasks.to_string()).unwrap();
    fs::write(dir.path().join("projects.json"), projects.to_string()).unwrap();

    let store = open_store(dir.path(), false).unwrap();
    let loaded_tasks: Vec<Task> = store.load(Collection::Tasks).unwrap();
    let loaded_projects: Vec<Project> = store.load(Collection::Projects).unwrap();
    store.save(Collection::Tasks, &loaded_tasks).unwrap();
    store.save(Collection::Projects, &loaded_projects).unwrap();

    assert_eq!(read_json(&store, Collection::Tasks), tasks);
    assert_eq!(read_json(&store, Collection::Projects), projects);
}

#[test]
fn pretty_json_option_indents_documents() {
    let dir = tempfile::tempdir().unwrap();
    let workspace =
        Workspace::open(WorkspaceConfig::new(dir.path()).with_pretty_json(true)).unwrap();
    workspace.create_task(NewTask::titled("pretty")).unwrap();

    let text = fs::read_to_string(dir.path().join("tasks.json")).unwrap();
    assert!(text.contains("\n  "));
}

fn assert_round_trip<T>(store: &JsonStore, collection: Collection)
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let before = fs::read(store.path_of(collection)).unwrap();
    let loaded: T = store.load(collection).unwrap();
    store.save(collection, &loaded).unwrap();
    let after = fs::read(store.path_of(collection)).unwrap();
    assert_eq!(before, after, "{collection} changed on save(load())");
}

fn read_json(store: &JsonStore, collection: Collection) -> serde_json::Value {
    let text = fs::read_to_string(store.path_of(collection)).unwrap();
    serde_json::from_str(&text).unwrap()
}
