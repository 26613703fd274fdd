//! Shared UI icons and emojis.
//!
//! This module provides common emoji constants used across the UI components
//! for consistent visual styling.

use console::Emoji;

use crate::models::{TaskPriority, TaskStatus};

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "*");

// Board and dashboard indicators
pub static BOARD: Emoji<'_, '_> = Emoji("📋 ", "");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static MEMBERS: Emoji<'_, '_> = Emoji("👥 ", "");
pub static MEGAPHONE: Emoji<'_, '_> = Emoji("📣 ", "");
pub static SPEECH: Emoji<'_, '_> = Emoji("💬 ", "");
pub static PICTURE: Emoji<'_, '_> = Emoji("🖼️  ", "");

/// Marker shown next to a task at the given priority.
pub fn priority_marker(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Low => "·",
        TaskPriority::Medium => "•",
        TaskPriority::High => "!",
        TaskPriority::Urgent => "!!",
    }
}

/// Terminal color name for a status, used when styling column headers.
pub fn status_color(status: TaskStatus) -> console::Color {
    match status {
        TaskStatus::Todo => console::Color::Red,
        TaskStatus::InProgress => console::Color::Cyan,
        TaskStatus::Review => console::Color::Yellow,
        TaskStatus::Done => console::Color::Green,
    }
}

/// Terminal color name for a priority, used in forms and the dashboard.
pub fn priority_color(priority: TaskPriority) -> console::Color {
    match priority {
        TaskPriority::Low => console::Color::Green,
        TaskPriority::Medium => console::Color::Yellow,
        TaskPriority::High => console::Color::Red,
        TaskPriority::Urgent => console::Color::Magenta,
    }
}
