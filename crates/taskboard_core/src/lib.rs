//! Core domain logic for Taskboard.
//! This crate is the single source of truth for board invariants.

pub mod form;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use form::project_form::{ProjectField, ProjectForm, ProjectFormErrors};
pub use form::task_input::normalize_task_text;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::id::{IdParseError, IdSequence, IdSequenceError, ProjectId, TaskId, MAX_ID};
pub use model::project::{Project, ProjectDraft};
pub use model::selection::Selection;
pub use model::task::Task;
pub use service::board_service::{BoardResult, BoardService, BoardServiceError, ProjectRemoval};
pub use store::action::Action;
pub use store::projects_store::{DispatchOutcome, ProjectsStore};
pub use store::reducer::{apply, BoardState};
pub use view::due_date::format_due_date;
pub use view::panel::{derive_panel, Panel, ProjectDetail};
pub use view::sidebar::{sidebar_entries, SidebarEntry};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
