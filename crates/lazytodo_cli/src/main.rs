//! CLI inspection entry point.
//!
//! # Responsibility
//! - Open a data directory through `lazytodo_core` and print a summary.
//! - Resolve host configuration from the environment; the core reads none.

use lazytodo_core::{
    core_version, default_log_level, init_logging, Workspace, WorkspaceConfig, DEFAULT_DATA_DIR,
};
use std::path::PathBuf;
use std::process::ExitCode;

const DATA_DIR_ENV: &str = "LAZYTODO_DATA_DIR";
const LOG_DIR_ENV: &str = "LAZYTODO_LOG_DIR";
const LOG_LEVEL_ENV: &str = "LAZYTODO_LOG_LEVEL";

fn main() -> ExitCode {
    let data_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

    if let Some(log_dir) = std::env::var_os(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, PathBuf::from(log_dir)) {
            eprintln!("logging disabled: {err}");
        }
    }

    let workspace = match Workspace::open(WorkspaceConfig::new(&data_dir)) {
        Ok(workspace) => workspace,
        Err(err) => {
            eprintln!("cannot open `{}`: {err}", data_dir.display());
            return ExitCode::FAILURE;
        }
    };

    match print_summary(&workspace) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cannot read `{}`: {err}", data_dir.display());
            ExitCode::FAILURE
        }
    }
}

fn print_summary(workspace: &Workspace) -> lazytodo_core::StoreResult<()> {
    let dashboard = workspace.dashboard()?;
    let analytics = &dashboard.analytics;

    println!("lazytodo_core version={}", core_version());
    println!("data_dir={}", workspace.config().data_dir.display());
    println!(
        "tasks={} projects={} notes={}",
        workspace.list_tasks()?.len(),
        dashboard.projects.len(),
        workspace.list_notes()?.len()
    );
    println!(
        "created={} completed={} archived={} completion_rate={:.2} last_updated={}",
        analytics.tasks_created,
        analytics.tasks_completed,
        analytics.tasks_archived,
        analytics.task_completion_rate,
        analytics.last_updated
    );
    for task in &dashboard.recent_tasks {
        let mark = if task.completed { "x" } else { " " };
        println!("[{mark}] {} {}", task.id, task.title);
    }
    Ok(())
}
