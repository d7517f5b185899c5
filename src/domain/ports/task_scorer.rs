use chrono::NaiveDate;

use crate::domain::models::{DependencyFacts, ScoredTask, Strategy, Task};

/// Port for per-task priority scoring.
///
/// Implementations must be pure: the result depends only on the task, the
/// precomputed dependency facts, the strategy and the reference date. No
/// state may be carried between calls.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskrank::domain::models::{DependencyFacts, Strategy, Task};
/// use taskrank::domain::ports::TaskScorer;
/// use taskrank::services::PriorityCalculator;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let task = Task::new("Fix bug")
///     .with_due_date(today)
///     .with_estimated_hours(1.0)
///     .with_importance(8);
///
/// let scored = PriorityCalculator::new().score(
///     &task,
///     &DependencyFacts::default(),
///     Strategy::SmartBalance,
///     today,
/// );
/// assert_eq!(scored.priority_score, 0.8433);
/// ```
pub trait TaskScorer: Send + Sync {
    /// Score one task under `strategy` relative to `today`.
    fn score(
        &self,
        task: &Task,
        facts: &DependencyFacts,
        strategy: Strategy,
        today: NaiveDate,
    ) -> ScoredTask;
}
