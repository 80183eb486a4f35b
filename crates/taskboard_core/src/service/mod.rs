//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate boundary checks and store dispatch into use-case APIs.
//! - Keep UI/FFI layers decoupled from reducer details.

pub mod board_service;
