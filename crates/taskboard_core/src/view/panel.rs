//! Main panel projection.

use crate::model::project::Project;
use crate::model::selection::Selection;
use crate::model::task::Task;
use crate::store::reducer::BoardState;
use crate::view::due_date::format_due_date;

/// Panel the UI should render for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel<'a> {
    /// New-project form.
    CreateProject,
    /// Empty-state prompt inviting the user to pick or create a project.
    NoProjectSelected,
    /// Header, task list and delete button for one project.
    ProjectDetail(ProjectDetail<'a>),
}

/// Selected-project detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail<'a> {
    pub project: &'a Project,
    /// Tasks owned by `project`, insertion order.
    pub tasks: Vec<&'a Task>,
    /// Human-readable due date for the header.
    pub due_date_label: String,
}

impl ProjectDetail<'_> {
    /// True when the project has no tasks yet.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Panel<'_> {
    /// Stable snake_case label for logs and UI bridges.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateProject => "create_project",
            Self::NoProjectSelected => "no_project_selected",
            Self::ProjectDetail(_) => "project_detail",
        }
    }
}

/// Resolves the panel for `state`.
pub fn derive_panel(state: &BoardState) -> Panel<'_> {
    match state.selection {
        Selection::Creating => Panel::CreateProject,
        Selection::None => Panel::NoProjectSelected,
        Selection::Selected(id) => match state.project(id) {
            Some(project) => Panel::ProjectDetail(ProjectDetail {
                project,
                tasks: state.tasks_for(id).collect(),
                due_date_label: format_due_date(&project.due_date),
            }),
            None => Panel::NoProjectSelected,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_panel, Panel};
    use crate::model::id::ProjectId;
    use crate::model::project::ProjectDraft;
    use crate::store::action::Action;
    use crate::store::reducer::{apply, BoardState};

    #[test]
    fn panel_kinds_follow_selection() {
        let state = BoardState::new();
        assert_eq!(derive_panel(&state), Panel::NoProjectSelected);

        let state = apply(state, Action::StartAddProject);
        assert_eq!(derive_panel(&state), Panel::CreateProject);
        assert_eq!(derive_panel(&state).kind(), "create_project");
    }

    #[test]
    fn detail_lists_only_owned_tasks() {
        let state = apply(
            BoardState::new(),
            Action::AddProject(ProjectDraft::new("A", "a", "2025-03-09")),
        );
        let state = apply(state, Action::AddTask("a1".to_string()));
        let state = apply(
            state,
            Action::AddProject(ProjectDraft::new("B", "b", "2025-04-01")),
        );
        let state = apply(state, Action::AddTask("b1".to_string()));
        let first = state.projects[0].id;
        let state = apply(state, Action::SelectProject(first));

        let Panel::ProjectDetail(detail) = derive_panel(&state) else {
            panic!("expected project detail");
        };
        assert_eq!(detail.project.title, "A");
        assert_eq!(detail.due_date_label, "Mar 9, 2025");
        let texts: Vec<&str> = detail.tasks.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, vec!["a1"]);
        assert!(!detail.is_empty());
    }

    #[test]
    fn stale_selection_falls_back_to_prompt() {
        let state = apply(BoardState::new(), Action::SelectProject(ProjectId::from_raw(77)));
        assert_eq!(derive_panel(&state), Panel::NoProjectSelected);
    }
}
