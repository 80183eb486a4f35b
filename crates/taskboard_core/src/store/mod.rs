//! Board state and its single mutation entry point.
//!
//! # Responsibility
//! - Define the action vocabulary consumed by UI collaborators.
//! - Provide the pure reducer `apply(state, action) -> state'`.
//! - Hold the live state in an explicit container mutated only via `dispatch`.
//!
//! # Invariants
//! - The reducer is total and side-effect free.
//! - No task outlives its owning project.

pub mod action;
pub mod projects_store;
pub mod reducer;
