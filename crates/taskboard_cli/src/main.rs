//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskboard_core` linkage without the Flutter shell.
//! - Drive one scripted board session and print every resulting panel.
//!
//! # Configuration
//! - `TASKBOARD_LOG_DIR`: absolute directory for rolling logs; unset keeps
//!   logging off.
//! - `TASKBOARD_LOG_LEVEL`: overrides the build-mode default level.

use std::process::ExitCode;
use taskboard_core::{BoardResult, BoardService, Panel, ProjectForm};

const LOG_DIR_ENV: &str = "TASKBOARD_LOG_DIR";
const LOG_LEVEL_ENV: &str = "TASKBOARD_LOG_LEVEL";

fn main() -> ExitCode {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    if let Err(err) = init_logging_from_env() {
        eprintln!("logging disabled: {err}");
    }

    match run_scenario() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scenario failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging_from_env() -> Result<(), String> {
    let Some(log_dir) = non_blank_env(LOG_DIR_ENV) else {
        return Ok(());
    };
    let level = non_blank_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|| taskboard_core::default_log_level().to_string());
    taskboard_core::init_logging(&level, &log_dir)
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn run_scenario() -> BoardResult<()> {
    let mut service = BoardService::new();
    print_step("start", &service);

    service.start_add_project();
    print_step("start_add_project", &service);

    service.submit_project(ProjectForm::new(
        "Website",
        "Redesign homepage",
        "2025-01-01",
    ))?;
    print_step("add_project", &service);

    service.submit_task("Write copy")?;
    print_step("add_task", &service);

    service.delete_project()?;
    print_step("delete_project", &service);

    let final_state = service.into_store().into_state();
    println!("[end] ids_issued={}", final_state.ids.peek() - 1);

    log::info!("event=smoke_scenario module=cli status=ok");
    Ok(())
}

fn print_step(label: &str, service: &BoardService) {
    let store = service.store();
    println!(
        "[{label}] projects={} tasks={} panel={}",
        store.projects().len(),
        store.tasks().len(),
        service.panel().kind()
    );
    if let Panel::ProjectDetail(detail) = service.panel() {
        println!(
            "  {} (due {}) tasks={}",
            detail.project.title,
            detail.due_date_label,
            detail.tasks.len()
        );
        for task in &detail.tasks {
            println!("  - [{}] {}", task.id, task.text);
        }
    }
}
