//! Task domain model.
//!
//! Tasks arrive as loosely typed JSON ([`TaskInput`]) and are validated into
//! [`Task`] before the dependency graph is built. A task only lives for the
//! duration of one analyze call; nothing is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::strategy::FactorScores;
use crate::domain::errors::{DomainError, DomainResult};

/// Importance assumed when a task does not specify one.
pub const DEFAULT_IMPORTANCE: u8 = 5;
/// Lowest importance rating.
pub const MIN_IMPORTANCE: i64 = 1;
/// Highest importance rating.
pub const MAX_IMPORTANCE: i64 = 10;
/// Longest accepted title, in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Unvalidated task as submitted by a caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskInput {
    /// Explicit identifier (string or number)
    #[serde(default)]
    pub id: Option<Value>,
    /// Required, non-blank title
    #[serde(default)]
    pub title: Option<String>,
    /// Deadline as `YYYY-MM-DD`
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Non-negative work estimate
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    /// Any JSON number; whole values are clamped, fractions are rejected
    #[serde(default)]
    pub importance: Option<Number>,
    /// Identifiers of prerequisite tasks
    #[serde(default)]
    pub dependencies: Option<Vec<Value>>,
}

impl TaskInput {
    /// Decode and validate the task found at `index` of a request.
    pub fn parse(index: usize, value: Value) -> DomainResult<Task> {
        let input: Self = serde_json::from_value(value)
            .map_err(|e| DomainError::invalid_task(index, e.to_string()))?;
        input.validate(index)
    }

    /// Validate into a [`Task`].
    ///
    /// Out-of-range importance is clamped rather than rejected; dependency
    /// entries that are not strings or numbers are dropped.
    pub fn validate(self, index: usize) -> DomainResult<Task> {
        let title = self
            .title
            .ok_or_else(|| DomainError::invalid_task(index, "title is required"))?;
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::invalid_task(index, "title must not be empty"));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(DomainError::invalid_task(
                index,
                format!("title must be at most {MAX_TITLE_LENGTH} characters"),
            ));
        }

        if let Some(hours) = self.estimated_hours {
            if !hours.is_finite() || hours < 0.0 {
                return Err(DomainError::invalid_task(
                    index,
                    "estimated_hours must be a non-negative number",
                ));
            }
        }

        let id = match self.id {
            None | Some(Value::Null) => title.clone(),
            Some(value) => reference_to_id(&value).ok_or_else(|| {
                DomainError::invalid_task(index, "id must be a non-empty string or a number")
            })?,
        };

        let importance = match self.importance {
            Some(number) => whole_importance(&number).ok_or_else(|| {
                DomainError::invalid_task(index, "importance must be a whole number")
            })?,
            None => i64::from(DEFAULT_IMPORTANCE),
        };

        let mut dependencies: Vec<String> = Vec::new();
        for entry in self.dependencies.unwrap_or_default() {
            match reference_to_id(&entry) {
                Some(dep) if !dependencies.contains(&dep) => dependencies.push(dep),
                Some(_) => {}
                None => tracing::debug!(
                    task = %id,
                    entry = %entry,
                    "dropping malformed dependency reference"
                ),
            }
        }

        Ok(Task {
            id,
            title,
            due_date: self.due_date,
            estimated_hours: self.estimated_hours,
            importance: clamp_importance(importance),
            dependencies,
        })
    }
}

/// Render an identifier reference. Strings are trimmed like titles, so a
/// padded reference still names a padded title; numbers use their JSON text
/// form. Blank strings and anything else are not identifiers.
pub fn reference_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Integer value of an importance rating. Integral floats such as `8.0`
/// are accepted and values beyond `i64` saturate, leaving the range to
/// [`clamp_importance`].
#[allow(clippy::cast_possible_truncation)]
fn whole_importance(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    if number.is_u64() {
        return Some(i64::MAX);
    }
    // `as` saturates at the i64 bounds
    number
        .as_f64()
        .filter(|value| value.is_finite() && value.fract() == 0.0)
        .map(|value| value as i64)
}

/// Clamp a raw importance rating into `1..=10`.
pub fn clamp_importance(raw: i64) -> u8 {
    // clamped into 1..=10, always fits
    u8::try_from(raw.clamp(MIN_IMPORTANCE, MAX_IMPORTANCE)).unwrap_or(DEFAULT_IMPORTANCE)
}

/// A validated task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier used for dependency resolution (explicit id, else title)
    pub id: String,
    /// Trimmed title
    pub title: String,
    /// Deadline
    pub due_date: Option<NaiveDate>,
    /// Work estimate in hours
    pub estimated_hours: Option<f64>,
    /// Importance rating, already clamped to 1-10
    pub importance: u8,
    /// Identifiers of the tasks this one depends on, deduplicated
    pub dependencies: Vec<String>,
}

impl Task {
    /// Create a task identified by its title, with default importance and
    /// no deadline, estimate or dependencies.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: title.clone(),
            title,
            due_date: None,
            estimated_hours: None,
            importance: DEFAULT_IMPORTANCE,
            dependencies: Vec::new(),
        }
    }

    /// Set an explicit identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the deadline.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the work estimate.
    #[must_use]
    pub const fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Set the importance, clamped into 1-10.
    #[must_use]
    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = clamp_importance(importance);
        self
    }

    /// Add dependencies, skipping duplicates.
    #[must_use]
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dep in dependencies {
            let dep = dep.into();
            if !self.dependencies.contains(&dep) {
                self.dependencies.push(dep);
            }
        }
        self
    }
}

/// A task annotated with its priority score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    /// The validated task
    #[serde(flatten)]
    pub task: Task,
    /// Final score in `[0, 1]`, rounded to 4 decimals
    pub priority_score: f64,
    /// Human-readable reason for the score
    pub explanation: String,
    /// Whether the task is part of a dependency cycle
    pub has_circular_dependency: bool,
    /// Ids of the cycle group this task belongs to, in input order
    #[serde(default)]
    pub cycle_members: Vec<String>,
    /// Raw factor scores, rounded to 4 decimals
    pub factors: FactorScores,
}
