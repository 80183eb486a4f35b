//! Read-only projections over board state.
//!
//! # Responsibility
//! - Decide which main panel the UI presents.
//! - Build sidebar entries and display labels.
//!
//! # Invariants
//! - Projections never mutate state and never fail; a stale selection
//!   resolves to the empty-state prompt.

pub mod due_date;
pub mod panel;
pub mod sidebar;
