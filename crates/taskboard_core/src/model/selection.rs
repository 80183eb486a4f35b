//! View selection state.
//!
//! # Invariants
//! - `Creating` and `None` are distinct states; the creation form is shown
//!   only for `Creating`.
//! - `Selected` may name a project that no longer exists. Readers must fall
//!   back to the empty-state prompt instead of failing.

use crate::model::id::ProjectId;
use serde::{Deserialize, Serialize};

/// Which panel the board is focused on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "project_id", rename_all = "snake_case")]
pub enum Selection {
    /// Nothing selected; empty-state prompt.
    #[default]
    None,
    /// New-project form is open.
    Creating,
    /// Project detail for the given id.
    Selected(ProjectId),
}

impl Selection {
    pub fn selected_id(self) -> Option<ProjectId> {
        match self {
            Self::Selected(id) => Some(id),
            Self::None | Self::Creating => None,
        }
    }

    pub fn is_creating(self) -> bool {
        matches!(self, Self::Creating)
    }
}
