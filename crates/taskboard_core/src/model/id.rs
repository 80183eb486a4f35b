//! Stable identifiers and the sequence that issues them.
//!
//! # Invariants
//! - `IdSequence` is monotonic; an issued value is never handed out again.
//! - Issued values never exceed `MAX_ID`. Once it is reached the sequence
//!   is exhausted and issues nothing further.
//! - Project and task ids share one sequence, so a raw value identifies at
//!   most one record across both collections.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identifier of one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

/// Identifier of one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

macro_rules! raw_id_impls {
    ($name:ident, $label:literal) => {
        impl $name {
            /// Wraps a raw value, e.g. one round-tripped through a UI widget.
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn raw(self) -> u64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                trimmed
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| IdParseError {
                        kind: $label,
                        value: trimmed.to_string(),
                    })
            }
        }
    };
}

raw_id_impls!(ProjectId, "project");
raw_id_impls!(TaskId, "task");

/// Error returned when a textual id is not a decimal `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError {
    kind: &'static str,
    value: String,
}

impl Display for IdParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} id: `{}`", self.kind, self.value)
    }
}

impl Error for IdParseError {}

/// Largest id the sequence issues: the top of the integer range a
/// Dart-on-web or JSON client holds exactly (2^53 - 1).
pub const MAX_ID: u64 = (1 << 53) - 1;

/// Monotonic id source owned by the board state.
///
/// Starts at 1 so that a zero value never names a live record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIdSequence")]
pub struct IdSequence {
    next: u64,
}

#[derive(Deserialize)]
struct RawIdSequence {
    next: u64,
}

impl TryFrom<RawIdSequence> for IdSequence {
    type Error = IdSequenceError;

    fn try_from(value: RawIdSequence) -> Result<Self, Self::Error> {
        Self::resume_at(value.next)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a sequence whose next value is `next`.
    ///
    /// `MAX_ID + 1` is accepted and yields an exhausted sequence.
    pub fn resume_at(next: u64) -> Result<Self, IdSequenceError> {
        match next {
            0 => Err(IdSequenceError::Zero),
            value if value > MAX_ID + 1 => Err(IdSequenceError::AboveMax(value)),
            value => Ok(Self { next: value }),
        }
    }

    /// Value the next call to `next_project`/`next_task` will hand out.
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn is_exhausted(&self) -> bool {
        self.next > MAX_ID
    }

    /// Issues a project id, or `None` once the sequence is exhausted.
    pub fn next_project(&mut self) -> Option<ProjectId> {
        self.advance().map(ProjectId)
    }

    /// Issues a task id, or `None` once the sequence is exhausted.
    pub fn next_task(&mut self) -> Option<TaskId> {
        self.advance().map(TaskId)
    }

    fn advance(&mut self) -> Option<u64> {
        if self.is_exhausted() {
            return None;
        }
        let issued = self.next;
        self.next += 1;
        Some(issued)
    }
}

/// Rejected `IdSequence` starting points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSequenceError {
    Zero,
    AboveMax(u64),
}

impl Display for IdSequenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zero => write!(f, "id sequence must start at 1 or above"),
            Self::AboveMax(value) => {
                write!(f, "id sequence value {value} exceeds {}", MAX_ID + 1)
            }
        }
    }
}

impl Error for IdSequenceError {}
