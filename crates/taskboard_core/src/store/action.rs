//! Action vocabulary.

use crate::model::id::{ProjectId, TaskId};
use crate::model::project::ProjectDraft;
use serde::{Deserialize, Serialize};

/// One user gesture translated into a state transition request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    SelectProject(ProjectId),
    StartAddProject,
    AddProject(ProjectDraft),
    CancelAddProject,
    /// Deletes the currently selected project and its tasks.
    DeleteProject,
    /// Adds a task to the currently selected project.
    AddTask(String),
    DeleteTask(TaskId),
}

impl Action {
    /// Stable snake_case name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectProject(_) => "select_project",
            Self::StartAddProject => "start_add_project",
            Self::AddProject(_) => "add_project",
            Self::CancelAddProject => "cancel_add_project",
            Self::DeleteProject => "delete_project",
            Self::AddTask(_) => "add_task",
            Self::DeleteTask(_) => "delete_task",
        }
    }
}
