//! Request and response shapes of the analyze and suggest operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::task::ScoredTask;

/// Transport-agnostic request: raw task entries plus an optional strategy.
///
/// Entries stay as raw JSON so each one can be validated on its own and
/// reported by index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw task entries
    #[serde(default)]
    pub tasks: Vec<Value>,
    /// Strategy name; the configured default when absent
    #[serde(default)]
    pub strategy: Option<String>,
}

impl AnalyzeRequest {
    /// Build a request from raw entries.
    pub fn new(tasks: Vec<Value>, strategy: Option<String>) -> Self {
        Self { tasks, strategy }
    }
}

/// Result of the analyze operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Scored tasks, highest priority first
    pub tasks: Vec<ScoredTask>,
    /// Wire name of the applied strategy
    pub strategy_used: String,
    /// Number of tasks scored
    pub total_tasks: usize,
    /// Whether any task is in a cycle
    pub circular_dependencies_detected: bool,
    /// Number of distinct cycle groups found
    pub circular_dependency_count: usize,
}

/// One entry of the suggest response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// 1-based rank
    pub rank: usize,
    /// The scored task
    pub task: ScoredTask,
    /// Why the task was picked
    pub reason: String,
}

impl Suggestion {
    /// Build the suggestion for the task at `rank`.
    pub fn new(rank: usize, task: ScoredTask) -> Self {
        let reason = format!(
            "Ranked #{rank} with priority score {}. {}",
            task.priority_score, task.explanation
        );
        Self { rank, task, reason }
    }
}

/// Result of the suggest operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// At most three tasks, best first
    pub suggestions: Vec<Suggestion>,
    /// Wire name of the applied strategy
    pub strategy_used: String,
    /// Number of tasks scored
    pub total_tasks_analyzed: usize,
    /// Whether any task is in a cycle
    pub circular_dependencies_detected: bool,
    /// Usage hint when no tasks were supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
