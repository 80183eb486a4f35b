//! Boundary input checks run before actions reach the store.
//!
//! The reducer accepts any well-formed draft; only these helpers enforce
//! required fields.

pub mod project_form;
pub mod task_input;
