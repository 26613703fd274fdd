//! Renders the task board as side-by-side status columns sized to the
//! terminal.

use console::{Alignment, measure_text_width, pad_str, style};
use terminal_size::{Width, terminal_size};

use crate::board::Column;
use crate::ui::icons::{priority_marker, status_color};
use crate::util::format_due_date;

const COLUMN_GAP: usize = 2;
const MIN_COLUMN_WIDTH: usize = 16;
const MAX_COLUMN_WIDTH: usize = 34;
const FALLBACK_TERMINAL_WIDTH: usize = 100;

/// Render the board at the current terminal width.
pub fn render_board(columns: &[Column<'_>]) -> String {
    let width = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(FALLBACK_TERMINAL_WIDTH);
    render_board_at(columns, width)
}

/// Render the board for an explicit total width.
pub fn render_board_at(columns: &[Column<'_>], total_width: usize) -> String {
    if columns.is_empty() {
        return String::new();
    }
    let gaps = COLUMN_GAP * (columns.len() - 1);
    let column_width = (total_width.saturating_sub(gaps) / columns.len())
        .clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);

    let rendered: Vec<Vec<String>> = columns
        .iter()
        .map(|column| render_column(column, column_width))
        .collect();
    let height = rendered.iter().map(|lines| lines.len()).max().unwrap_or(0);

    let gap = " ".repeat(COLUMN_GAP);
    let blank = " ".repeat(column_width);
    let mut out = String::new();
    for row in 0..height {
        let line: Vec<&str> = rendered
            .iter()
            .map(|lines| lines.get(row).map(String::as_str).unwrap_or(&blank))
            .collect();
        out.push_str(line.join(&gap).trim_end());
        out.push('\n');
    }
    out
}

fn render_column(column: &Column<'_>, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    let header = format!("{} ({})", column.status.label(), column.tasks.len());
    lines.push(pad(
        style(header).fg(status_color(column.status)).bold().to_string(),
        width,
    ));
    lines.push("─".repeat(width));

    if column.tasks.is_empty() {
        lines.push(pad(style("(empty)").dim().to_string(), width));
        return lines;
    }

    for task in &column.tasks {
        let card_title = format!("{} #{} {}", priority_marker(task.priority), task.id, task.title);
        for wrapped in textwrap::wrap(&card_title, width) {
            lines.push(pad(wrapped.to_string(), width));
        }
        let mut meta = Vec::new();
        if let Some(assignee) = task.assignee_id {
            meta.push(format!("@{}", assignee));
        }
        let due = format_due_date(task.due_date);
        if !due.is_empty() {
            meta.push(due);
        }
        if !meta.is_empty() {
            lines.push(pad(style(format!("  {}", meta.join("  "))).dim().to_string(), width));
        }
    }
    lines
}

fn pad(text: String, width: usize) -> String {
    if measure_text_width(&text) >= width {
        return text;
    }
    pad_str(&text, width, Alignment::Left, None).to_string()
}
