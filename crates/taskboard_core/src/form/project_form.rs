//! New-project form validation.
//!
//! # Invariants
//! - Every missing field is reported, not just the first one.
//! - Field values pass through unchanged on success.

use crate::model::project::ProjectDraft;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field of the new-project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectField {
    Title,
    Description,
    DueDate,
}

impl ProjectField {
    /// Stable field id shared with UI widgets.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DueDate => "due_date",
        }
    }

    /// Inline message shown under the field when it is missing.
    pub fn required_message(self) -> &'static str {
        match self {
            Self::Title => "Title is required",
            Self::Description => "Description is required",
            Self::DueDate => "Due Date is required",
        }
    }
}

/// Raw form input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl ProjectForm {
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

    /// Checks required fields and converts the input into a draft.
    pub fn validate(self) -> Result<ProjectDraft, ProjectFormErrors> {
        let missing: Vec<ProjectField> = [
            (ProjectField::Title, &self.title),
            (ProjectField::Description, &self.description),
            (ProjectField::DueDate, &self.due_date),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ProjectFormErrors { missing });
        }

        Ok(ProjectDraft::new(self.title, self.description, self.due_date))
    }
}

/// Field-level validation failures for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFormErrors {
    missing: Vec<ProjectField>,
}

impl ProjectFormErrors {
    /// Failing fields in form order.
    pub fn fields(&self) -> &[ProjectField] {
        &self.missing
    }

    /// Message for `field`, or `None` when the field passed.
    pub fn message(&self, field: ProjectField) -> Option<&'static str> {
        self.missing
            .contains(&field)
            .then(|| field.required_message())
    }
}

impl Display for ProjectFormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .missing
            .iter()
            .map(|field| field.required_message())
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl Error for ProjectFormErrors {}
