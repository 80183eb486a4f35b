//! Pure board reducer.
//!
//! # Invariants
//! - `apply` never fails and never panics.
//! - Ids come from `BoardState::ids`; two calls on equal states yield equal
//!   results.
//! - `DeleteProject` removes exactly the tasks owned by the deleted project.
//! - `AddTask` only attaches to a project that exists.
//! - Creating actions are no-ops once the id sequence is exhausted.
//! - A decoded snapshot holds unique ids, all below `ids.peek()`.

use crate::model::id::{IdSequence, ProjectId, TaskId};
use crate::model::project::Project;
use crate::model::selection::Selection;
use crate::model::task::Task;
use crate::store::action::Action;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Full board state: collections, selection and the id sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawBoardState")]
pub struct BoardState {
    /// Insertion order is display order.
    pub projects: Vec<Project>,
    /// Insertion order is display order.
    pub tasks: Vec<Task>,
    pub selection: Selection,
    pub ids: IdSequence,
}

#[derive(Deserialize)]
struct RawBoardState {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    selection: Selection,
    ids: IdSequence,
}

impl TryFrom<RawBoardState> for BoardState {
    type Error = String;

    fn try_from(value: RawBoardState) -> Result<Self, Self::Error> {
        let issued = value
            .projects
            .iter()
            .map(|project| project.id.raw())
            .chain(value.tasks.iter().map(|task| task.id.raw()));
        let mut seen = BTreeSet::new();
        for raw in issued {
            if raw >= value.ids.peek() {
                return Err(format!(
                    "id {raw} was not issued by sequence at {}",
                    value.ids.peek()
                ));
            }
            if !seen.insert(raw) {
                return Err(format!("id {raw} appears more than once"));
            }
        }

        Ok(Self {
            projects: value.projects,
            tasks: value.tasks,
            selection: value.selection,
            ids: value.ids,
        })
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks owned by `project_id` in insertion order.
    pub fn tasks_for(&self, project_id: ProjectId) -> impl Iterator<Item = &Task> + '_ {
        self.tasks
            .iter()
            .filter(move |task| task.belongs_to(project_id))
    }

    /// Project named by the selection, if it still exists.
    pub fn selected_project(&self) -> Option<&Project> {
        self.selection
            .selected_id()
            .and_then(|id| self.project(id))
    }
}

/// Computes the next state for one action.
pub fn apply(state: BoardState, action: Action) -> BoardState {
    let mut next = state;
    apply_in_place(&mut next, action);
    next
}

/// In-place form of [`apply`], used by the store container to avoid
/// cloning the collections on every dispatch.
pub(crate) fn apply_in_place(state: &mut BoardState, action: Action) {
    match action {
        Action::SelectProject(id) => {
            state.selection = Selection::Selected(id);
        }
        Action::StartAddProject => {
            state.selection = Selection::Creating;
        }
        Action::AddProject(draft) => {
            let Some(id) = state.ids.next_project() else {
                return;
            };
            state.projects.push(draft.into_project(id));
            state.selection = Selection::Selected(id);
        }
        Action::CancelAddProject => {
            state.selection = Selection::None;
        }
        Action::DeleteProject => {
            let Selection::Selected(project_id) = state.selection else {
                return;
            };
            state.projects.retain(|project| project.id != project_id);
            state.tasks.retain(|task| !task.belongs_to(project_id));
            state.selection = Selection::None;
        }
        Action::AddTask(text) => {
            let Some(project_id) = state.selected_project().map(|project| project.id) else {
                return;
            };
            let Some(id) = state.ids.next_task() else {
                return;
            };
            state.tasks.push(Task {
                id,
                text,
                project_id,
            });
        }
        Action::DeleteTask(id) => {
            state.tasks.retain(|task| task.id != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, BoardState};
    use crate::model::id::{IdSequence, ProjectId, TaskId, MAX_ID};
    use crate::model::project::ProjectDraft;
    use crate::model::selection::Selection;
    use crate::store::action::Action;

    fn draft(title: &str) -> ProjectDraft {
        ProjectDraft::new(title, "desc", "2025-01-01")
    }

    #[test]
    fn select_project_accepts_unknown_ids() {
        let state = apply(BoardState::new(), Action::SelectProject(ProjectId::from_raw(99)));
        assert_eq!(state.selection, Selection::Selected(ProjectId::from_raw(99)));
        assert!(state.selected_project().is_none());
    }

    #[test]
    fn add_project_selects_new_project() {
        let state = apply(BoardState::new(), Action::StartAddProject);
        assert_eq!(state.selection, Selection::Creating);

        let state = apply(state, Action::AddProject(draft("Alpha")));
        assert_eq!(state.projects.len(), 1);
        let id = state.projects[0].id;
        assert_eq!(state.selection, Selection::Selected(id));
    }

    #[test]
    fn cancel_add_project_returns_to_none() {
        let state = apply(BoardState::new(), Action::StartAddProject);
        let state = apply(state, Action::CancelAddProject);
        assert_eq!(state.selection, Selection::None);
    }

    #[test]
    fn delete_project_without_selection_is_noop() {
        let state = apply(BoardState::new(), Action::AddProject(draft("Alpha")));
        let state = apply(state, Action::StartAddProject);
        let before = state.clone();

        let after = apply(state, Action::DeleteProject);
        assert_eq!(after, before);
    }

    #[test]
    fn add_task_ignored_when_creating_or_unselected() {
        let state = apply(BoardState::new(), Action::AddProject(draft("Alpha")));
        let state = apply(state, Action::StartAddProject);
        let before = state.clone();
        let state = apply(state, Action::AddTask("orphan".to_string()));
        assert_eq!(state, before);

        let state = apply(state, Action::CancelAddProject);
        let before = state.clone();
        let state = apply(state, Action::AddTask("orphan".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn add_task_ignored_for_stale_selection() {
        let state = apply(
            BoardState::new(),
            Action::SelectProject(ProjectId::from_raw(404)),
        );
        let before = state.clone();
        let state = apply(state, Action::AddTask("orphan".to_string()));
        assert_eq!(state, before);
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn creating_actions_are_noops_when_ids_are_exhausted() {
        let state = apply(BoardState::new(), Action::AddProject(draft("Alpha")));
        let mut exhausted = state.clone();
        exhausted.ids = IdSequence::resume_at(MAX_ID + 1).expect("exhausted sequence");

        let after = apply(exhausted.clone(), Action::AddTask("late".to_string()));
        assert_eq!(after, exhausted);
        let after = apply(exhausted.clone(), Action::AddProject(draft("Beta")));
        assert_eq!(after, exhausted);
    }

    #[test]
    fn delete_task_removes_only_matching_task() {
        let state = apply(BoardState::new(), Action::AddProject(draft("Alpha")));
        let state = apply(state, Action::AddTask("one".to_string()));
        let state = apply(state, Action::AddTask("two".to_string()));
        let first = state.tasks[0].id;

        let state = apply(state, Action::DeleteTask(first));
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].text, "two");
        assert!(state.task(first).is_none());
        assert!(state.task(TaskId::from_raw(first.raw() + 1)).is_some());
    }
}
