//! Board use-case service.
//!
//! # Responsibility
//! - Run boundary checks (form fields, blank task text) before dispatch.
//! - Translate reducer no-ops into caller-facing errors.
//! - Keep UI/FFI layers decoupled from the reducer's action vocabulary.
//!
//! # Invariants
//! - Service APIs never bypass `ProjectsStore::dispatch`.
//! - A rejected submission leaves the store untouched.

use crate::form::project_form::{ProjectForm, ProjectFormErrors};
use crate::form::task_input::normalize_task_text;
use crate::model::id::{ProjectId, TaskId};
use crate::store::action::Action;
use crate::store::projects_store::{DispatchOutcome, ProjectsStore};
use crate::view::panel::{derive_panel, Panel};
use crate::view::sidebar::{sidebar_entries, SidebarEntry};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardServiceError>;

/// Service error for board use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardServiceError {
    /// New-project form failed required-field checks.
    InvalidProjectForm(ProjectFormErrors),
    /// Task input was blank.
    EmptyTaskText,
    /// Operation needs a selected, existing project.
    NoProjectSelected,
    /// Store outcome did not match the dispatched action.
    InconsistentState(&'static str),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProjectForm(err) => write!(f, "invalid project form: {err}"),
            Self::EmptyTaskText => write!(f, "task text must not be blank"),
            Self::NoProjectSelected => write!(f, "no project selected"),
            Self::InconsistentState(details) => write!(f, "inconsistent board state: {details}"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidProjectForm(err) => Some(err),
            Self::EmptyTaskText | Self::NoProjectSelected | Self::InconsistentState(_) => None,
        }
    }
}

impl From<ProjectFormErrors> for BoardServiceError {
    fn from(value: ProjectFormErrors) -> Self {
        Self::InvalidProjectForm(value)
    }
}

/// What `BoardService::delete_project` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectRemoval {
    /// Project and its tasks were removed.
    Removed {
        project_id: ProjectId,
        removed_tasks: usize,
    },
    /// Selection named a project that no longer exists; only the selection
    /// was reset.
    StaleSelectionCleared(ProjectId),
}

/// Use-case facade over one session store.
#[derive(Debug, Default)]
pub struct BoardService {
    store: ProjectsStore,
}

impl BoardService {
    /// Creates a service over an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over an existing store.
    pub fn with_store(store: ProjectsStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ProjectsStore {
        &self.store
    }

    /// Ends the session and hands back the store.
    pub fn into_store(self) -> ProjectsStore {
        self.store
    }

    /// Focuses one project. Unknown ids are accepted and render as the
    /// empty-state prompt.
    pub fn select_project(&mut self, id: ProjectId) {
        self.store.dispatch(Action::SelectProject(id));
    }

    /// Opens the new-project form.
    pub fn start_add_project(&mut self) {
        self.store.dispatch(Action::StartAddProject);
    }

    /// Validates the form and creates the project.
    ///
    /// # Contract
    /// - On success the new project becomes the selection.
    /// - On failure the store is unchanged and every missing field is reported.
    pub fn submit_project(&mut self, form: ProjectForm) -> BoardResult<ProjectId> {
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(err) => {
                warn!(
                    "event=project_submit module=service status=rejected missing_fields={}",
                    err.fields().len()
                );
                return Err(err.into());
            }
        };

        match self.store.dispatch(Action::AddProject(draft)) {
            DispatchOutcome::ProjectCreated(id) => {
                info!("event=project_submit module=service status=ok project_id={id}");
                Ok(id)
            }
            _ => Err(BoardServiceError::InconsistentState(
                "add_project did not report a created project",
            )),
        }
    }

    /// Closes the new-project form without creating anything.
    pub fn cancel_add_project(&mut self) {
        self.store.dispatch(Action::CancelAddProject);
    }

    /// Deletes the selected project together with its tasks.
    ///
    /// # Contract
    /// - Fails with `NoProjectSelected` only when nothing is selected.
    /// - A selection naming a missing project is still cleared; the result
    ///   reports that nothing was removed.
    pub fn delete_project(&mut self) -> BoardResult<ProjectRemoval> {
        let id = self
            .store
            .selection()
            .selected_id()
            .ok_or(BoardServiceError::NoProjectSelected)?;
        let existed = self.store.project(id).is_some();
        let removed_tasks = self.store.tasks_for(id).len();
        self.store.dispatch(Action::DeleteProject);

        if existed {
            info!(
                "event=project_delete module=service status=ok project_id={id} removed_tasks={removed_tasks}"
            );
            Ok(ProjectRemoval::Removed {
                project_id: id,
                removed_tasks,
            })
        } else {
            warn!("event=project_delete module=service status=stale project_id={id}");
            Ok(ProjectRemoval::StaleSelectionCleared(id))
        }
    }

    /// Adds a task to the selected project.
    pub fn submit_task(&mut self, raw: &str) -> BoardResult<TaskId> {
        let text = normalize_task_text(raw).ok_or(BoardServiceError::EmptyTaskText)?;
        match self.store.dispatch(Action::AddTask(text)) {
            DispatchOutcome::TaskCreated(id) => Ok(id),
            _ => Err(BoardServiceError::NoProjectSelected),
        }
    }

    /// Removes one task. Returns `false` when the id was unknown.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        self.store.dispatch(Action::DeleteTask(id)) != DispatchOutcome::Unchanged
    }

    /// Panel to render for the current state.
    pub fn panel(&self) -> Panel<'_> {
        derive_panel(self.store.state())
    }

    /// Sidebar rows for the current state.
    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        sidebar_entries(self.store.state())
    }
}
