//! Domain ports (interfaces)
//!
//! Traits the service layer implements so the analyzer can be driven by
//! any scorer.

/// Per-task scoring port
pub mod task_scorer;

pub use task_scorer::TaskScorer;
