//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level board functions to Dart via FRB.
//! - Own board state in a per-UI `BoardSession` handle, never a global.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Ids cross the boundary as decimal strings.
//! - Failures are reported in response envelopes, never thrown.

use log::warn;
use taskboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardService, BoardServiceError, Panel, ProjectField, ProjectForm, ProjectId, ProjectRemoval,
    TaskId,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One field-level validation message for the new-project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorItem {
    /// Field id (`title|description|due_date`).
    pub field: String,
    /// Inline message shown under the field.
    pub message: String,
}

/// Action response envelope for board commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the command took effect.
    pub ok: bool,
    /// Created or removed record id, when the command has one.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Per-field form errors; empty unless project validation failed.
    pub field_errors: Vec<FieldErrorItem>,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    fn from_service_error(operation: &str, err: BoardServiceError) -> Self {
        let field_errors = match &err {
            BoardServiceError::InvalidProjectForm(errors) => errors
                .fields()
                .iter()
                .map(|field| FieldErrorItem {
                    field: field.as_str().to_string(),
                    message: field.required_message().to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };
        Self {
            field_errors,
            ..Self::failure(format!("{operation} failed: {err}"))
        }
    }
}

/// Project header fields for the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDto {
    pub project_id: String,
    pub title: String,
    pub description: String,
    /// Raw due date as entered.
    pub due_date: String,
    /// Display form, e.g. `Jan 1, 2025`.
    pub due_date_label: String,
}

/// One row of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDto {
    pub task_id: String,
    pub text: String,
}

/// Flattened main panel for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardViewDto {
    /// `create_project|no_project_selected|project_detail`.
    pub kind: String,
    /// Set only for `project_detail`.
    pub project: Option<ProjectDto>,
    /// Tasks of `project`; empty for other panels.
    pub tasks: Vec<TaskDto>,
}

/// One sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItemDto {
    pub project_id: String,
    pub title: String,
    pub is_active: bool,
}

/// Board state owned by one UI instance.
///
/// # FFI contract
/// - Opaque to Dart; all methods are sync and non-blocking.
/// - Each handle is independent; dropping it discards its board.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Default)]
pub struct BoardSession {
    service: BoardService,
}

impl BoardSession {
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Focuses a project. Unknown ids are accepted and render as the
    /// empty-state prompt; unparseable ids are rejected.
    #[flutter_rust_bridge::frb(sync)]
    pub fn select_project(&mut self, project_id: String) -> BoardActionResponse {
        match project_id.parse::<ProjectId>() {
            Ok(id) => {
                self.service.select_project(id);
                BoardActionResponse::success("Project selected.", Some(id.to_string()))
            }
            Err(err) => {
                warn!("event=select_project module=ffi status=rejected reason=invalid_id");
                BoardActionResponse::failure(format!("select_project failed: {err}"))
            }
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn start_add_project(&mut self) {
        self.service.start_add_project();
    }

    /// Validates and creates a project; returns field errors on failure.
    #[flutter_rust_bridge::frb(sync)]
    pub fn submit_project(
        &mut self,
        title: String,
        description: String,
        due_date: String,
    ) -> BoardActionResponse {
        match self
            .service
            .submit_project(ProjectForm::new(title, description, due_date))
        {
            Ok(id) => BoardActionResponse::success("Project created.", Some(id.to_string())),
            Err(err) => BoardActionResponse::from_service_error("submit_project", err),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn cancel_add_project(&mut self) {
        self.service.cancel_add_project();
    }

    /// Deletes the selected project and its tasks.
    ///
    /// A selection naming an already-removed project is cleared and
    /// reported with `ok = true` and no `id`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_project(&mut self) -> BoardActionResponse {
        match self.service.delete_project() {
            Ok(ProjectRemoval::Removed { project_id, .. }) => {
                BoardActionResponse::success("Project deleted.", Some(project_id.to_string()))
            }
            Ok(ProjectRemoval::StaleSelectionCleared(_)) => BoardActionResponse::success(
                "Project already removed; selection cleared.",
                None,
            ),
            Err(err) => BoardActionResponse::from_service_error("delete_project", err),
        }
    }

    /// Adds a task to the selected project.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_task(&mut self, text: String) -> BoardActionResponse {
        match self.service.submit_task(text.as_str()) {
            Ok(id) => BoardActionResponse::success("Task added.", Some(id.to_string())),
            Err(err) => BoardActionResponse::from_service_error("add_task", err),
        }
    }

    /// Removes a task. Unknown ids succeed as no-ops.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_task(&mut self, task_id: String) -> BoardActionResponse {
        match task_id.parse::<TaskId>() {
            Ok(id) => {
                let message = if self.service.delete_task(id) {
                    "Task deleted."
                } else {
                    "Task already removed."
                };
                BoardActionResponse::success(message, Some(id.to_string()))
            }
            Err(err) => BoardActionResponse::failure(format!("delete_task failed: {err}")),
        }
    }

    /// Current main panel.
    #[flutter_rust_bridge::frb(sync)]
    pub fn view(&self) -> BoardViewDto {
        let panel = self.service.panel();
        let kind = panel.kind().to_string();
        match panel {
            Panel::ProjectDetail(detail) => BoardViewDto {
                kind,
                project: Some(ProjectDto {
                    project_id: detail.project.id.to_string(),
                    title: detail.project.title.clone(),
                    description: detail.project.description.clone(),
                    due_date: detail.project.due_date.clone(),
                    due_date_label: detail.due_date_label,
                }),
                tasks: detail
                    .tasks
                    .iter()
                    .map(|task| TaskDto {
                        task_id: task.id.to_string(),
                        text: task.text.clone(),
                    })
                    .collect(),
            },
            Panel::CreateProject | Panel::NoProjectSelected => BoardViewDto {
                kind,
                project: None,
                tasks: Vec::new(),
            },
        }
    }

    /// Sidebar rows in creation order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn sidebar(&self) -> Vec<SidebarItemDto> {
        self.service
            .sidebar()
            .into_iter()
            .map(|entry| SidebarItemDto {
                project_id: entry.id.to_string(),
                title: entry.title,
                is_active: entry.is_active,
            })
            .collect()
    }
}

/// Field ids accepted in `FieldErrorItem::field`.
#[flutter_rust_bridge::frb(sync)]
pub fn project_form_fields() -> Vec<String> {
    [
        ProjectField::Title,
        ProjectField::Description,
        ProjectField::DueDate,
    ]
    .into_iter()
    .map(|field| field.as_str().to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, project_form_fields, BoardSession};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/taskboard-logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn session_runs_website_scenario() {
        let mut session = BoardSession::new();
        assert_eq!(session.view().kind, "no_project_selected");

        session.start_add_project();
        assert_eq!(session.view().kind, "create_project");

        let created = session.submit_project(
            "Website".to_string(),
            "Redesign homepage".to_string(),
            "2025-01-01".to_string(),
        );
        assert!(created.ok, "{}", created.message);
        let project_id = created.id.expect("created project should return id");

        let task = session.add_task("Write copy".to_string());
        assert!(task.ok, "{}", task.message);

        let view = session.view();
        assert_eq!(view.kind, "project_detail");
        let project = view.project.expect("detail view should carry project");
        assert_eq!(project.project_id, project_id);
        assert_eq!(project.due_date_label, "Jan 1, 2025");
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.tasks[0].text, "Write copy");

        let deleted = session.delete_project();
        assert!(deleted.ok, "{}", deleted.message);
        assert_eq!(deleted.id.as_deref(), Some(project_id.as_str()));
        assert_eq!(session.view().kind, "no_project_selected");
        assert!(session.sidebar().is_empty());
    }

    #[test]
    fn submit_project_returns_field_errors() {
        let mut session = BoardSession::new();
        session.start_add_project();

        let response = session.submit_project(String::new(), "desc".to_string(), String::new());
        assert!(!response.ok);
        let fields: Vec<&str> = response
            .field_errors
            .iter()
            .map(|item| item.field.as_str())
            .collect();
        assert_eq!(fields, vec!["title", "due_date"]);
        assert_eq!(response.field_errors[0].message, "Title is required");
        assert_eq!(session.view().kind, "create_project");
    }

    #[test]
    fn invalid_ids_are_rejected_without_state_change() {
        let mut session = BoardSession::new();
        let response = session.select_project("not-a-number".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid project id"));

        let response = session.delete_task("x".to_string());
        assert!(!response.ok);
        assert_eq!(session.view().kind, "no_project_selected");
    }

    #[test]
    fn stale_selection_falls_back_to_prompt() {
        let mut session = BoardSession::new();
        let response = session.select_project("12345".to_string());
        assert!(response.ok);
        assert_eq!(session.view().kind, "no_project_selected");

        let task = session.add_task("orphan".to_string());
        assert!(!task.ok);
        assert!(task.message.contains("no project selected"));
    }

    #[test]
    fn delete_project_clears_stale_selection() {
        let mut session = BoardSession::new();
        session.start_add_project();
        let created = session.submit_project(
            "Keep".to_string(),
            "still here".to_string(),
            "2025-05-05".to_string(),
        );
        assert!(created.ok, "{}", created.message);
        assert!(session.select_project("4242".to_string()).ok);

        let response = session.delete_project();
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.id, None);
        assert!(response.message.contains("selection cleared"));
        assert_eq!(session.view().kind, "no_project_selected");
        let sidebar = session.sidebar();
        assert_eq!(sidebar.len(), 1);
        assert!(!sidebar[0].is_active);

        let again = session.delete_project();
        assert!(!again.ok);
        assert!(again.message.contains("no project selected"));
    }

    #[test]
    fn sessions_are_independent() {
        let mut first = BoardSession::new();
        let second = BoardSession::new();
        first.start_add_project();
        let created = first.submit_project(
            "Solo".to_string(),
            "only here".to_string(),
            "2025-05-05".to_string(),
        );
        assert!(created.ok);

        assert_eq!(first.sidebar().len(), 1);
        assert!(first.sidebar()[0].is_active);
        assert!(second.sidebar().is_empty());
    }

    #[test]
    fn delete_task_unknown_id_is_noop_success() {
        let mut session = BoardSession::new();
        let response = session.delete_task("99".to_string());
        assert!(response.ok);
        assert_eq!(response.message, "Task already removed.");
    }

    #[test]
    fn form_field_ids_are_stable() {
        assert_eq!(project_form_fields(), vec!["title", "description", "due_date"]);
    }
}
