/// Dependency graph analysis
pub mod dependency_resolver;
/// Factor scoring
pub mod priority_calculator;
pub mod task_analyzer;

pub use dependency_resolver::{DependencyResolver, GraphAnalysis};
pub use priority_calculator::PriorityCalculator;
pub use task_analyzer::{Ranking, TaskAnalyzer, SUGGESTION_COUNT};
