//! Sidebar project list projection.

use crate::model::id::ProjectId;
use crate::store::reducer::BoardState;

/// One clickable project row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub id: ProjectId,
    pub title: String,
    /// Highlighted row; at most one per list.
    pub is_active: bool,
}

/// Lists projects in insertion order with the selected one marked active.
pub fn sidebar_entries(state: &BoardState) -> Vec<SidebarEntry> {
    let active = state.selection.selected_id();
    state
        .projects
        .iter()
        .map(|project| SidebarEntry {
            id: project.id,
            title: project.title.clone(),
            is_active: active == Some(project.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sidebar_entries;
    use crate::model::project::ProjectDraft;
    use crate::store::action::Action;
    use crate::store::reducer::{apply, BoardState};

    #[test]
    fn creating_state_has_no_active_entry() {
        let state = apply(
            BoardState::new(),
            Action::AddProject(ProjectDraft::new("A", "a", "2025-01-01")),
        );
        let state = apply(state, Action::StartAddProject);

        let entries = sidebar_entries(&state);
        assert_eq!(entries.len(), 1);
        assert!(entries.iter().all(|entry| !entry.is_active));
    }
}
