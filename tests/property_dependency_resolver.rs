//! Property tests for the dependency graph analysis, checked against a
//! brute-force reachability oracle.

use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};
use taskrank::services::DependencyResolver;
use taskrank::Task;

/// Random graph: `size` tasks, each depending on a random subset of ids.
/// Ids outside `0..size` model references to unknown tasks.
fn graph_strategy() -> impl Strategy<Value = Vec<Task>> {
    (1usize..24).prop_flat_map(|size| {
        prop::collection::vec(prop::collection::vec(0usize..size + 3, 0..4), size).prop_map(
            move |edges| {
                edges
                    .into_iter()
                    .enumerate()
                    .map(|(i, deps)| {
                        Task::new(format!("Task {i}"))
                            .with_id(format!("t{i}"))
                            .with_dependencies(deps.into_iter().map(|d| format!("t{d}")))
                    })
                    .collect()
            },
        )
    })
}

fn edges_of(tasks: &[Task], i: usize) -> Vec<usize> {
    tasks[i]
        .dependencies
        .iter()
        .filter_map(|dep| tasks.iter().position(|t| &t.id == dep))
        .collect()
}

/// Whether `from` can reach `to` through at least one edge.
fn reaches(tasks: &[Task], from: usize, to: usize) -> bool {
    let mut seen = HashSet::new();
    let mut queue: VecDeque<usize> = edges_of(tasks, from).into();
    while let Some(node) = queue.pop_front() {
        if node == to {
            return true;
        }
        if seen.insert(node) {
            queue.extend(edges_of(tasks, node));
        }
    }
    false
}

proptest! {
    /// Property: a task is in a cycle exactly when it can reach itself
    #[test]
    fn prop_cycle_membership_matches_reachability(tasks in graph_strategy()) {
        let analysis = DependencyResolver::new().analyze(&tasks);

        for i in 0..tasks.len() {
            prop_assert_eq!(
                analysis.in_cycle(i),
                reaches(&tasks, i, i),
                "task {} disagrees with oracle", i
            );
        }
    }

    /// Property: dependents counts distinct other tasks naming this one
    #[test]
    fn prop_dependents_count_distinct_referrers(tasks in graph_strategy()) {
        let analysis = DependencyResolver::new().analyze(&tasks);

        for i in 0..tasks.len() {
            let expected = (0..tasks.len())
                .filter(|&j| j != i && edges_of(&tasks, j).contains(&i))
                .count();
            prop_assert_eq!(analysis.dependents(i), expected);
        }
    }

    /// Property: two tasks share a cycle group iff they reach each other
    #[test]
    fn prop_cycle_groups_are_mutually_reachable(tasks in graph_strategy()) {
        let analysis = DependencyResolver::new().analyze(&tasks);

        for group in analysis.cycle_groups() {
            for &a in group {
                for &b in group {
                    if a != b {
                        prop_assert!(reaches(&tasks, a, b));
                    }
                }
            }
        }
    }

    /// Property: every reported cycle path is a closed walk over real edges
    #[test]
    fn prop_cycle_paths_follow_edges(tasks in graph_strategy()) {
        let analysis = DependencyResolver::new().analyze(&tasks);

        for group in 0..analysis.cycle_groups().len() {
            let path = analysis.cycle_path(group);
            prop_assert!(path.len() >= 2);
            prop_assert_eq!(path.first(), path.last());
            for pair in path.windows(2) {
                prop_assert!(edges_of(&tasks, pair[0]).contains(&pair[1]));
            }
        }
    }

    /// Property: an acyclic chain never reports a cycle
    #[test]
    fn prop_chain_is_acyclic(size in 1usize..64) {
        let tasks: Vec<Task> = (0..size)
            .map(|i| {
                let deps = if i + 1 < size { vec![format!("t{}", i + 1)] } else { vec![] };
                Task::new(format!("Task {i}")).with_id(format!("t{i}")).with_dependencies(deps)
            })
            .collect();

        let resolver = DependencyResolver::new();
        prop_assert!(!resolver.analyze(&tasks).has_cycles());
        prop_assert!(resolver.detect_cycle(&tasks).is_none());
    }
}
