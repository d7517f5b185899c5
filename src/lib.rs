//! Taskrank - task priority scoring engine
//!
//! Ranks a list of tasks by a weighted blend of four factors (urgency,
//! importance, effort and how many other tasks depend on each one) under one
//! of four named strategies, and flags tasks caught in circular
//! dependencies.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): task, strategy and response models, errors and the scorer port
//! - **Service Layer** (`services`): scoring, dependency-graph analysis and the
//!   analyze/suggest operations
//! - **Infrastructure Layer** (`infrastructure`): configuration, logging and the HTTP binding
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use serde_json::json;
//! use taskrank::{AnalyzeRequest, TaskAnalyzer};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let request = AnalyzeRequest::new(
//!     vec![
//!         json!({
//!             "title": "Fix bug",
//!             "due_date": "2025-02-26",
//!             "estimated_hours": 2,
//!             "importance": 8
//!         }),
//!         json!({"title": "Write docs", "importance": 3}),
//!     ],
//!     None,
//! );
//!
//! let response = TaskAnalyzer::new().analyze(request, today).unwrap();
//! assert_eq!(response.tasks[0].task.title, "Fix bug");
//! assert_eq!(response.strategy_used, "smart_balance");
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
/// Scoring, graph analysis and orchestration
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AnalyzeRequest, AnalyzeResponse, Config, ScoredTask, Strategy, SuggestResponse, Suggestion,
    Task, TaskInput,
};
pub use domain::ports::TaskScorer;
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{DependencyResolver, PriorityCalculator, TaskAnalyzer};
