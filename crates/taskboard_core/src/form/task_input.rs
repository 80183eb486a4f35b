//! New-task input normalization.

/// Returns the task text to submit, or `None` for blank input.
///
/// Non-blank text is kept verbatim, surrounding whitespace included.
pub fn normalize_task_text(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
