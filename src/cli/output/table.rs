//! Table output formatting for CLI commands
//!
//! Renders scored tasks, suggestions and the strategy catalogue with
//! comfy-table. Colors follow the score band and honor `NO_COLOR`.

use std::env;

use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::domain::models::{Factor, ScoredTask, Strategy, Suggestion};

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a formatter that colors output unless `NO_COLOR` is set
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a formatter with explicit settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format ranked tasks, highest score first
    pub fn format_scored_tasks(&self, tasks: &[ScoredTask]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&[
            "#", "Score", "Title", "Due", "Hours", "Imp", "Cycle", "Explanation",
        ]));

        for (i, scored) in tasks.iter().enumerate() {
            let task = &scored.task;
            table.add_row(vec![
                Cell::new(i + 1).set_alignment(CellAlignment::Right),
                self.score_cell(scored.priority_score),
                Cell::new(truncate_text(&task.title, 40)),
                Cell::new(task.due_date.map_or_else(|| "-".to_string(), |d| d.to_string())),
                Cell::new(task.estimated_hours.map_or_else(|| "-".to_string(), |h| format!("{h}")))
                    .set_alignment(CellAlignment::Right),
                Cell::new(task.importance).set_alignment(CellAlignment::Right),
                self.cycle_cell(scored.has_circular_dependency),
                Cell::new(&scored.explanation),
            ]);
        }

        table.to_string()
    }

    /// Format suggestions in rank order
    pub fn format_suggestions(&self, suggestions: &[Suggestion]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["Rank", "Score", "Title", "Reason"]));

        for suggestion in suggestions {
            table.add_row(vec![
                Cell::new(suggestion.rank).set_alignment(CellAlignment::Right),
                self.score_cell(suggestion.task.priority_score),
                Cell::new(truncate_text(&suggestion.task.task.title, 40)),
                Cell::new(&suggestion.reason),
            ]);
        }

        table.to_string()
    }

    /// Format the strategy catalogue, marking the configured default
    pub fn format_strategies(&self, default: Strategy) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&[
            "Strategy", "Name", "Urgency", "Importance", "Effort", "Dependents",
        ]));

        for strategy in Strategy::ALL {
            let weights = strategy.weights();
            let name = if strategy == default {
                format!("{strategy} (default)")
            } else {
                strategy.to_string()
            };
            let mut row = vec![Cell::new(name), Cell::new(strategy.label())];
            row.extend(Factor::ALL.iter().map(|&f| {
                Cell::new(format!("{:.2}", weights.weight(f))).set_alignment(CellAlignment::Right)
            }));
            table.add_row(row);
        }

        table.to_string()
    }

    fn score_cell(&self, score: f64) -> Cell {
        let cell = Cell::new(format!("{score:.4}")).set_alignment(CellAlignment::Right);
        if self.use_colors {
            cell.fg(score_color(score))
        } else {
            cell
        }
    }

    fn cycle_cell(&self, in_cycle: bool) -> Cell {
        match (in_cycle, self.use_colors) {
            (true, true) => Cell::new("yes").fg(Color::Red).add_attribute(Attribute::Bold),
            (true, false) => Cell::new("yes"),
            (false, _) => Cell::new("-"),
        }
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|t| Cell::new(t).add_attribute(Attribute::Bold))
        .collect()
}

/// Check if color output is supported
fn supports_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    env::var("TERM").map_or(true, |term| term != "dumb")
}

fn score_color(score: f64) -> Color {
    if score >= 0.75 {
        Color::Red
    } else if score >= 0.5 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Truncate to at most `max_len` characters, appending "..." if truncated.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
