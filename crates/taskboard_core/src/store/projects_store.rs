//! Explicit store container.
//!
//! # Responsibility
//! - Own one `BoardState` for a UI session.
//! - Route every mutation through the reducer.
//! - Emit one metadata-only log event per dispatched action.
//!
//! # Invariants
//! - State is never mutated outside `dispatch`.
//! - Log lines never include titles, descriptions or task text.

use crate::model::id::{ProjectId, TaskId};
use crate::model::project::Project;
use crate::model::selection::Selection;
use crate::model::task::Task;
use crate::store::action::Action;
use crate::store::reducer::{apply_in_place, BoardState};
use log::debug;

/// Result of one dispatch, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// `AddProject` created this project.
    ProjectCreated(ProjectId),
    /// `AddTask` created this task.
    TaskCreated(TaskId),
    /// State changed without creating a record.
    Applied,
    /// Action was a no-op for the current state.
    Unchanged,
}

/// Session-scoped board store.
#[derive(Debug, Clone, Default)]
pub struct ProjectsStore {
    state: BoardState,
}

impl ProjectsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing state, e.g. a decoded snapshot.
    pub fn from_state(state: BoardState) -> Self {
        Self { state }
    }

    /// Applies one action and reports what changed.
    pub fn dispatch(&mut self, action: Action) -> DispatchOutcome {
        let action_name = action.name();
        let issued_before = self.state.ids.peek();
        let before = StateFingerprint::of(&self.state);

        apply_in_place(&mut self.state, action);

        let outcome = if self.state.ids.peek() != issued_before {
            match (self.state.projects.last(), self.state.tasks.last()) {
                (Some(project), _) if project.id.raw() == issued_before => {
                    DispatchOutcome::ProjectCreated(project.id)
                }
                (_, Some(task)) if task.id.raw() == issued_before => {
                    DispatchOutcome::TaskCreated(task.id)
                }
                _ => DispatchOutcome::Applied,
            }
        } else if StateFingerprint::of(&self.state) == before {
            DispatchOutcome::Unchanged
        } else {
            DispatchOutcome::Applied
        };

        debug!(
            "event=action_dispatched module=store action={} status={} projects={} tasks={} selection={}",
            action_name,
            outcome_label(outcome),
            self.state.projects.len(),
            self.state.tasks.len(),
            selection_label(self.state.selection)
        );

        outcome
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Consumes the store and returns its final state.
    pub fn into_state(self) -> BoardState {
        self.state
    }

    pub fn projects(&self) -> &[Project] {
        &self.state.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn selection(&self) -> Selection {
        self.state.selection
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.state.project(id)
    }

    pub fn tasks_for(&self, project_id: ProjectId) -> Vec<&Task> {
        self.state.tasks_for(project_id).collect()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.state.selected_project()
    }
}

/// Cheap change detector; every non-creating transition alters at least one
/// of these fields.
#[derive(PartialEq, Eq)]
struct StateFingerprint {
    projects: usize,
    tasks: usize,
    selection: Selection,
}

impl StateFingerprint {
    fn of(state: &BoardState) -> Self {
        Self {
            projects: state.projects.len(),
            tasks: state.tasks.len(),
            selection: state.selection,
        }
    }
}

fn outcome_label(outcome: DispatchOutcome) -> &'static str {
    match outcome {
        DispatchOutcome::ProjectCreated(_) => "project_created",
        DispatchOutcome::TaskCreated(_) => "task_created",
        DispatchOutcome::Applied => "applied",
        DispatchOutcome::Unchanged => "unchanged",
    }
}

fn selection_label(selection: Selection) -> &'static str {
    match selection {
        Selection::None => "none",
        Selection::Creating => "creating",
        Selection::Selected(_) => "selected",
    }
}

#[cfg(test)]
mod tests {
    use super::{DispatchOutcome, ProjectsStore};
    use crate::model::id::{ProjectId, TaskId};
    use crate::model::project::ProjectDraft;
    use crate::model::selection::Selection;
    use crate::store::action::Action;

    #[test]
    fn dispatch_reports_created_ids() {
        let mut store = ProjectsStore::new();
        let outcome = store.dispatch(Action::AddProject(ProjectDraft::new(
            "Alpha",
            "desc",
            "2025-01-01",
        )));
        let DispatchOutcome::ProjectCreated(project_id) = outcome else {
            panic!("expected project creation, got {outcome:?}");
        };
        assert_eq!(store.selection(), Selection::Selected(project_id));

        let outcome = store.dispatch(Action::AddTask("first".to_string()));
        let DispatchOutcome::TaskCreated(task_id) = outcome else {
            panic!("expected task creation, got {outcome:?}");
        };
        assert_eq!(store.tasks_for(project_id).len(), 1);
        assert_eq!(store.tasks()[0].id, task_id);
    }

    #[test]
    fn dispatch_reports_unchanged_for_noops() {
        let mut store = ProjectsStore::new();
        assert_eq!(
            store.dispatch(Action::DeleteTask(TaskId::from_raw(5))),
            DispatchOutcome::Unchanged
        );
        assert_eq!(
            store.dispatch(Action::DeleteProject),
            DispatchOutcome::Unchanged
        );
        assert_eq!(
            store.dispatch(Action::AddTask("nowhere".to_string())),
            DispatchOutcome::Unchanged
        );
    }

    #[test]
    fn dispatch_reports_applied_for_selection_changes() {
        let mut store = ProjectsStore::new();
        assert_eq!(
            store.dispatch(Action::StartAddProject),
            DispatchOutcome::Applied
        );
        assert_eq!(
            store.dispatch(Action::SelectProject(ProjectId::from_raw(3))),
            DispatchOutcome::Applied
        );
        assert_eq!(
            store.dispatch(Action::SelectProject(ProjectId::from_raw(3))),
            DispatchOutcome::Unchanged
        );
    }
}
