//! Shared utility functions for the crewboard crate.

/// Truncate text to `max` characters, appending an ellipsis when cut.
/// Counts chars, not bytes, so multi-byte input never splits mid-character.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

/// Render an optional due date as `due 2026-01-15`, or an empty string.
pub fn format_due_date(due: Option<chrono::NaiveDate>) -> String {
    match due {
        Some(date) => format!("due {}", date.format("%Y-%m-%d")),
        None => String::new(),
    }
}
