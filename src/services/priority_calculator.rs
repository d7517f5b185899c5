use chrono::NaiveDate;

use crate::domain::errors::DomainResult;
use crate::domain::models::task::{MAX_IMPORTANCE, MIN_IMPORTANCE};
use crate::domain::models::{DependencyFacts, Factor, FactorScores, ScoredTask, Strategy, Task};
use crate::domain::ports::TaskScorer;

/// Urgency of a task without a deadline.
pub const NO_DUE_DATE_URGENCY: f64 = 0.5;
/// Effort score of a task without an estimate.
pub const NO_ESTIMATE_EFFORT: f64 = 0.5;

/// Days for the overdue bonus to cover ~63% of its 0.1 headroom.
const OVERDUE_DECAY_DAYS: f64 = 7.0;
/// Curvature of the exponential interpolation between urgency anchors.
const SEGMENT_CURVATURE: f64 = 2.0;
/// e-folding time of urgency beyond 30 days.
const FAR_FUTURE_DECAY_DAYS: f64 = 30.0;
/// e-folding time of the effort score beyond 40 hours.
const EXTENSIVE_EFFORT_DECAY_HOURS: f64 = 40.0;

/// (start day, end day, score at start, score at end)
const URGENCY_SEGMENTS: [(f64, f64, f64, f64); 3] = [
    (3.0, 7.0, 0.85, 0.70),
    (7.0, 14.0, 0.70, 0.50),
    (14.0, 30.0, 0.50, 0.30),
];

/// Urgency factor for a due date relative to `today`.
pub fn urgency_score(due_date: Option<NaiveDate>, today: NaiveDate) -> f64 {
    due_date.map_or(NO_DUE_DATE_URGENCY, |due| {
        urgency_for_days(days_until(due, today))
    })
}

/// Urgency factor for a signed number of days until the deadline.
///
/// Overdue tasks score in `[0.9, 1.0)`, growing with lateness. From the due
/// day on the score never increases: 1.0 today, 0.95 tomorrow, 0.85 at
/// three days, then exponential interpolation through 0.70 (7 days), 0.50
/// (14 days) and 0.30 (30 days), decaying towards zero afterwards.
pub fn urgency_for_days(days: i64) -> f64 {
    match days {
        d if d < 0 => {
            let overdue = d.unsigned_abs() as f64;
            (0.9 + 0.1 * (1.0 - (-overdue / OVERDUE_DECAY_DAYS).exp())).min(1.0)
        }
        0 => 1.0,
        1 => 0.95,
        2 => 0.90,
        3 => 0.85,
        d if d <= 30 => {
            let d = d as f64;
            URGENCY_SEGMENTS
                .iter()
                .find(|(start, end, _, _)| d > *start && d <= *end)
                .map_or(0.30, |&(start, end, from, to)| {
                    interpolate_decay(d, start, end, from, to)
                })
        }
        d => 0.30 * (-((d - 30) as f64) / FAR_FUTURE_DECAY_DAYS).exp(),
    }
}

/// Exponential curve from `from` at `start` to `to` at `end`, hitting both
/// endpoints exactly.
fn interpolate_decay(days: f64, start: f64, end: f64, from: f64, to: f64) -> f64 {
    let t = (days - start) / (end - start);
    let floor = (-SEGMENT_CURVATURE).exp();
    to + (from - to) * ((-SEGMENT_CURVATURE * t).exp() - floor) / (1.0 - floor)
}

/// Importance factor: clamp to 1-10, then map 1 to 0.0 and 10 to 1.0.
pub fn importance_score(raw: i64) -> f64 {
    let clamped = raw.clamp(MIN_IMPORTANCE, MAX_IMPORTANCE);
    (clamped - MIN_IMPORTANCE) as f64 / (MAX_IMPORTANCE - MIN_IMPORTANCE) as f64
}

/// Effort factor: the less work, the higher the score. Bucket lower bounds
/// are inclusive, so exactly 1 hour lands in the 0.9 bucket.
pub fn effort_score(hours: Option<f64>) -> f64 {
    let Some(hours) = hours else {
        return NO_ESTIMATE_EFFORT;
    };
    match hours {
        h if h < 1.0 => 1.0,
        h if h < 2.0 => 0.9,
        h if h < 4.0 => 0.75,
        h if h < 8.0 => 0.6,
        h if h < 16.0 => 0.4,
        h if h < 40.0 => 0.25,
        h => 0.25 * (-(h - 40.0) / EXTENSIVE_EFFORT_DECAY_HOURS).exp(),
    }
}

/// Dependents factor from the number of tasks waiting on this one.
pub const fn dependents_score(dependents: usize) -> f64 {
    match dependents {
        0 => 0.3,
        1 => 0.6,
        2 | 3 => 0.8,
        _ => 1.0,
    }
}

fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    due.signed_duration_since(today).num_days()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn plural(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Service scoring tasks with the fixed weight table of a strategy.
///
/// Stateless: every input arrives as an argument, including the reference
/// date, so identical inputs always produce identical scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityCalculator;

impl PriorityCalculator {
    /// Create a calculator.
    pub const fn new() -> Self {
        Self
    }

    /// Compute the four raw factor scores for a task.
    pub fn factors(&self, task: &Task, dependents: usize, today: NaiveDate) -> FactorScores {
        FactorScores {
            urgency: urgency_score(task.due_date, today),
            importance: importance_score(i64::from(task.importance)),
            effort: effort_score(task.estimated_hours),
            dependents: dependents_score(dependents),
        }
    }

    /// Final score in `[0, 1]` under `strategy`, unrounded.
    pub fn calculate(
        &self,
        task: &Task,
        dependents: usize,
        strategy: Strategy,
        today: NaiveDate,
    ) -> f64 {
        strategy.weights().combine(&self.factors(task, dependents, today))
    }

    /// Score a task given a strategy name; unknown names fail with
    /// [`crate::domain::DomainError::InvalidStrategy`].
    pub fn score_named(
        &self,
        task: &Task,
        facts: &DependencyFacts,
        strategy: &str,
        today: NaiveDate,
    ) -> DomainResult<ScoredTask> {
        let strategy: Strategy = strategy.parse()?;
        Ok(self.score(task, facts, strategy, today))
    }

    /// Build the explanation: strategy label followed by the (at most two)
    /// factors contributing most to the weighted score.
    pub fn explain(
        &self,
        task: &Task,
        facts: &DependencyFacts,
        factors: &FactorScores,
        strategy: Strategy,
        today: NaiveDate,
    ) -> String {
        let weights = strategy.weights();
        let mut contributions: Vec<(Factor, f64)> = Factor::ALL
            .into_iter()
            .filter(|&f| weights.weight(f) > 0.0)
            .map(|f| (f, weights.weight(f) * factors.get(f)))
            .collect();
        // stable: equal contributions keep table order
        contributions.sort_by(|a, b| b.1.total_cmp(&a.1));

        let reasons: Vec<String> = contributions
            .iter()
            .take(2)
            .map(|&(factor, _)| describe(factor, task, facts, today))
            .collect();

        let mut explanation = format!("{}: {}", strategy.label(), reasons.join("; "));
        if facts.in_cycle {
            explanation.push_str(" (circular dependency)");
        }
        explanation
    }
}

impl TaskScorer for PriorityCalculator {
    fn score(
        &self,
        task: &Task,
        facts: &DependencyFacts,
        strategy: Strategy,
        today: NaiveDate,
    ) -> ScoredTask {
        let factors = self.factors(task, facts.dependents, today);
        let score = strategy.weights().combine(&factors);
        let explanation = self.explain(task, facts, &factors, strategy, today);

        tracing::debug!(task = %task.id, %strategy, score, "task scored");

        ScoredTask {
            task: task.clone(),
            priority_score: round4(score),
            explanation,
            has_circular_dependency: facts.in_cycle,
            cycle_members: facts.cycle_members.clone(),
            factors: FactorScores {
                urgency: round4(factors.urgency),
                importance: round4(factors.importance),
                effort: round4(factors.effort),
                dependents: round4(factors.dependents),
            },
        }
    }
}

fn describe(factor: Factor, task: &Task, facts: &DependencyFacts, today: NaiveDate) -> String {
    match factor {
        Factor::Urgency => describe_urgency(task.due_date, today),
        Factor::Importance => describe_importance(task.importance),
        Factor::Effort => describe_effort(task.estimated_hours),
        Factor::Dependents => describe_dependents(facts.dependents),
    }
}

fn describe_urgency(due_date: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(due) = due_date else {
        return "no due date".to_string();
    };
    match days_until(due, today) {
        d if d < 0 => format!("overdue by {}", plural(d.unsigned_abs(), "day")),
        0 => "due today".to_string(),
        1 => "due tomorrow".to_string(),
        d => format!("due in {d} days"),
    }
}

fn describe_importance(importance: u8) -> String {
    let qualifier = match importance {
        9.. => "very high",
        7..=8 => "high",
        5..=6 => "moderate",
        3..=4 => "low-moderate",
        _ => "low",
    };
    format!("{qualifier} importance ({importance}/10)")
}

fn describe_effort(hours: Option<f64>) -> String {
    let Some(hours) = hours else {
        return "no estimate".to_string();
    };
    let size = match hours {
        h if h < 1.0 => "quick win",
        h if h < 4.0 => "low effort",
        h if h < 16.0 => "medium effort",
        _ => "high effort",
    };
    format!("{size} ({hours}h)")
}

fn describe_dependents(dependents: usize) -> String {
    if dependents == 0 {
        "no dependents".to_string()
    } else {
        format!("blocks {}", plural(dependents as u64, "task"))
    }
}
