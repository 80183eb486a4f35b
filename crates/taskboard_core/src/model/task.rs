//! Task record.

use crate::model::id::{ProjectId, TaskId};
use serde::{Deserialize, Serialize};

/// Single to-do item owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    /// Owning project. Cascade-deleted together with it.
    pub project_id: ProjectId,
}

impl Task {
    pub fn belongs_to(&self, project_id: ProjectId) -> bool {
        self.project_id == project_id
    }
}
