//! UI bridge for Taskboard core.
//!
//! Exposes session-scoped board APIs to the Flutter shell through
//! flutter_rust_bridge.

pub mod api;
