pub mod analysis;
/// Application configuration
pub mod config;
pub mod dependency;
pub mod strategy;
pub mod task;

pub use analysis::{AnalyzeRequest, AnalyzeResponse, SuggestResponse, Suggestion};
pub use config::{Config, LoggingConfig, ServerConfig};
pub use dependency::DependencyFacts;
pub use strategy::{Factor, FactorScores, Strategy, StrategyWeights};
pub use task::{ScoredTask, Task, TaskInput};
