//! `taskrank suggest`

use anyhow::Result;

use super::{load_request, today_or_local};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::cli::types::TaskFileArgs;
use crate::domain::models::SuggestResponse;
use crate::services::TaskAnalyzer;

impl CommandOutput for SuggestResponse {
    fn to_human(&self) -> String {
        if self.suggestions.is_empty() {
            return self
                .message
                .clone()
                .unwrap_or_else(|| "No tasks to suggest.".to_string());
        }

        let mut lines = vec![
            format!(
                "Top {} of {} task(s) ({})",
                self.suggestions.len(),
                self.total_tasks_analyzed,
                self.strategy_used
            ),
            TableFormatter::new().format_suggestions(&self.suggestions),
        ];
        if self.circular_dependencies_detected {
            lines.push("Warning: circular dependencies detected.".to_string());
        }
        lines.join("\n")
    }
}

/// Run `taskrank suggest`.
pub fn execute(args: TaskFileArgs, analyzer: &TaskAnalyzer, json_mode: bool) -> Result<()> {
    let request = load_request(&args.file, args.strategy)?;
    let response = analyzer.suggest(request, today_or_local(args.today))?;
    output(&response, json_mode);
    Ok(())
}
