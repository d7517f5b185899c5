//! Analyze and suggest operations.
//!
//! Validates a raw request, runs the dependency analysis once over the
//! whole list, scores every task and orders the result.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    AnalyzeRequest, AnalyzeResponse, Config, ScoredTask, Strategy, SuggestResponse, Suggestion,
    Task, TaskInput,
};
use crate::domain::ports::TaskScorer;
use crate::services::{DependencyResolver, PriorityCalculator};

/// Number of tasks returned by the suggest operation.
pub const SUGGESTION_COUNT: usize = 3;

const DEFAULT_MAX_TASKS: usize = 5000;

/// Scored tasks in priority order plus the cycles found on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Scored tasks, highest priority first
    pub tasks: Vec<ScoredTask>,
    /// One closed path of task ids per cycle group
    pub cycles: Vec<Vec<String>>,
}

impl Ranking {
    /// Whether any cycle was found.
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

/// Orchestrates validation, dependency analysis and scoring.
///
/// Holds only immutable settings; every call builds its own graph, so one
/// analyzer can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct TaskAnalyzer<S = PriorityCalculator> {
    scorer: S,
    resolver: DependencyResolver,
    default_strategy: Strategy,
    max_tasks: usize,
}

impl TaskAnalyzer<PriorityCalculator> {
    /// Analyzer with the default scorer and settings.
    pub fn new() -> Self {
        Self::with_scorer(PriorityCalculator::new())
    }

    /// Build an analyzer from configuration.
    pub fn from_config(config: &Config) -> DomainResult<Self> {
        let default_strategy = config.default_strategy.parse()?;
        Ok(Self::new()
            .with_default_strategy(default_strategy)
            .with_max_tasks(config.max_tasks))
    }
}

impl Default for TaskAnalyzer<PriorityCalculator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TaskScorer> TaskAnalyzer<S> {
    /// Analyzer using a custom scorer.
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            resolver: DependencyResolver::new(),
            default_strategy: Strategy::default(),
            max_tasks: DEFAULT_MAX_TASKS,
        }
    }

    /// Strategy used when a request names none.
    #[must_use]
    pub const fn with_default_strategy(mut self, strategy: Strategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Largest accepted task list.
    #[must_use]
    pub const fn with_max_tasks(mut self, max_tasks: usize) -> Self {
        self.max_tasks = max_tasks;
        self
    }

    /// The configured default strategy.
    pub const fn default_strategy(&self) -> Strategy {
        self.default_strategy
    }

    /// Resolve a requested strategy name. Only an absent name falls back to
    /// the default; an unknown name is an error.
    pub fn resolve_strategy(&self, name: Option<&str>) -> DomainResult<Strategy> {
        name.map_or(Ok(self.default_strategy), str::parse)
    }

    /// Validate every raw entry. The batch fails as a whole on the first
    /// invalid entry or on an ambiguous identifier.
    pub fn validate_tasks(&self, entries: Vec<Value>) -> DomainResult<Vec<Task>> {
        if entries.len() > self.max_tasks {
            return Err(DomainError::TooManyTasks {
                count: entries.len(),
                max: self.max_tasks,
            });
        }

        let mut seen: HashMap<String, usize> = HashMap::with_capacity(entries.len());
        let mut tasks = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let task = TaskInput::parse(index, entry)?;
            if seen.insert(task.id.clone(), index).is_some() {
                return Err(DomainError::DuplicateTaskId { id: task.id, index });
            }
            tasks.push(task);
        }
        Ok(tasks)
    }

    /// Score `tasks` under `strategy` and sort by score, highest first.
    /// Ties keep input order.
    pub fn rank(&self, tasks: &[Task], strategy: Strategy, today: NaiveDate) -> Ranking {
        let graph = self.resolver.analyze(tasks);

        let mut scored: Vec<ScoredTask> = tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let facts = graph.facts(index, tasks);
                self.scorer.score(task, &facts, strategy, today)
            })
            .collect();
        scored.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

        let cycles: Vec<Vec<String>> = (0..graph.cycle_groups().len())
            .map(|group| {
                graph
                    .cycle_path(group)
                    .into_iter()
                    .map(|i| tasks[i].id.clone())
                    .collect()
            })
            .collect();
        for cycle in &cycles {
            warn!(cycle = %cycle.join(" -> "), "circular dependency detected");
        }

        Ranking {
            tasks: scored,
            cycles,
        }
    }

    /// The analyze operation.
    pub fn analyze(
        &self,
        request: AnalyzeRequest,
        today: NaiveDate,
    ) -> DomainResult<AnalyzeResponse> {
        let strategy = self.resolve_strategy(request.strategy.as_deref())?;
        if request.tasks.is_empty() {
            return Err(DomainError::Validation(
                "no tasks provided; supply a non-empty list of tasks".to_string(),
            ));
        }
        let tasks = self.validate_tasks(request.tasks)?;
        let ranking = self.rank(&tasks, strategy, today);

        info!(
            tasks = tasks.len(),
            %strategy,
            cycles = ranking.cycles.len(),
            "tasks analyzed"
        );

        Ok(AnalyzeResponse {
            total_tasks: ranking.tasks.len(),
            circular_dependencies_detected: ranking.has_cycles(),
            circular_dependency_count: ranking.cycles.len(),
            strategy_used: strategy.to_string(),
            tasks: ranking.tasks,
        })
    }

    /// The suggest operation: the top three of the analyze ordering. An
    /// empty list yields no suggestions rather than an error.
    pub fn suggest(
        &self,
        request: AnalyzeRequest,
        today: NaiveDate,
    ) -> DomainResult<SuggestResponse> {
        let strategy = self.resolve_strategy(request.strategy.as_deref())?;
        let tasks = self.validate_tasks(request.tasks)?;
        let ranking = self.rank(&tasks, strategy, today);
        let circular_dependencies_detected = ranking.has_cycles();

        let suggestions: Vec<Suggestion> = ranking
            .tasks
            .into_iter()
            .take(SUGGESTION_COUNT)
            .enumerate()
            .map(|(i, task)| Suggestion::new(i + 1, task))
            .collect();
        debug!(suggestions = suggestions.len(), %strategy, "suggestions ready");

        Ok(SuggestResponse {
            suggestions,
            strategy_used: strategy.to_string(),
            total_tasks_analyzed: tasks.len(),
            circular_dependencies_detected,
            message: None,
        })
    }
}
