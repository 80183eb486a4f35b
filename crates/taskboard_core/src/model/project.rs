//! Project record.

use crate::model::id::ProjectId;
use serde::{Deserialize, Serialize};

/// Unit of work that owns zero or more tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Date-valued string as entered, normally `YYYY-MM-DD`.
    pub due_date: String,
}

/// Project fields before the store assigns an id.
///
/// The reducer accepts any draft; required-field checks live in
/// `form::project_form`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl ProjectDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
        }
    }

    /// Materializes the draft under a freshly issued id.
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
        }
    }
}
