//! `taskrank analyze`

use std::collections::BTreeSet;

use anyhow::Result;

use super::{load_request, today_or_local};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::cli::types::TaskFileArgs;
use crate::domain::models::AnalyzeResponse;
use crate::services::TaskAnalyzer;

impl CommandOutput for AnalyzeResponse {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Strategy: {}", self.strategy_used),
            TableFormatter::new().format_scored_tasks(&self.tasks),
            format!("{} task(s) analyzed.", self.total_tasks),
        ];

        if self.circular_dependencies_detected {
            let groups: BTreeSet<&Vec<String>> = self
                .tasks
                .iter()
                .filter(|t| t.has_circular_dependency)
                .map(|t| &t.cycle_members)
                .collect();
            lines.push(format!(
                "Circular dependencies detected in {} group(s):",
                self.circular_dependency_count
            ));
            for group in groups {
                lines.push(format!("  {}", group.join(", ")));
            }
        }

        lines.join("\n")
    }
}

/// Run `taskrank analyze`.
pub fn execute(args: TaskFileArgs, analyzer: &TaskAnalyzer, json_mode: bool) -> Result<()> {
    let request = load_request(&args.file, args.strategy)?;
    let response = analyzer.analyze(request, today_or_local(args.today))?;
    output(&response, json_mode);
    Ok(())
}
