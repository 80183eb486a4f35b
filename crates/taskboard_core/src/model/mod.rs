//! Board domain model.
//!
//! # Responsibility
//! - Define the project/task records held by the store.
//! - Define the tri-state selection that drives panel choice.
//!
//! # Invariants
//! - Ids are issued only by `IdSequence` and never reused.
//! - Records are immutable after creation; removal is the only change.

pub mod id;
pub mod project;
pub mod selection;
pub mod task;
