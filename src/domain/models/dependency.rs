//! Per-task facts derived from the dependency graph.

/// What the dependency graph says about a single task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyFacts {
    /// Number of distinct other tasks that list this task as a dependency
    pub dependents: usize,
    /// Whether the task participates in any dependency cycle
    pub in_cycle: bool,
    /// Ids of every task in the same cycle group, in input order
    pub cycle_members: Vec<String>,
}

impl DependencyFacts {
    /// Facts for a task outside any cycle.
    pub const fn with_dependents(dependents: usize) -> Self {
        Self {
            dependents,
            in_cycle: false,
            cycle_members: Vec::new(),
        }
    }
}
