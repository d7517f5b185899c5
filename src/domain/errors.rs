//! Domain errors for the taskrank scoring engine.

use thiserror::Error;

/// Domain-level errors raised while validating or scoring a batch of tasks.
///
/// Every variant except [`DomainError::InvalidStrategy`] belongs to the
/// validation family: the whole batch is rejected and no partial results
/// are produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Request-level validation failure
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A task entry failed validation
    #[error("Invalid task at index {index}: {reason}")]
    InvalidTask {
        /// Position of the entry in the request
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Two tasks resolve to the same identifier
    #[error("Duplicate task identifier '{id}' at index {index}")]
    DuplicateTaskId {
        /// The repeated identifier
        id: String,
        /// Position of the second occurrence
        index: usize,
    },

    /// The request exceeds the configured task limit
    #[error("Too many tasks: {count} submitted, at most {max} allowed")]
    TooManyTasks {
        /// Tasks submitted
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// Unknown strategy name
    #[error("Invalid strategy '{0}'. Must be one of: smart_balance, fastest_wins, high_impact, deadline_driven")]
    InvalidStrategy(String),
}

impl DomainError {
    /// Whether this error is a request validation failure (as opposed to an
    /// unrecognised strategy name).
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::InvalidStrategy(_))
    }

    /// Stable machine-readable name of the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidStrategy(_) => "InvalidStrategy",
            _ => "ValidationError",
        }
    }

    pub(crate) fn invalid_task(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidTask {
            index,
            reason: reason.into(),
        }
    }
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
