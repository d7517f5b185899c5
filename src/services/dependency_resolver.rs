use std::collections::{HashMap, VecDeque};

use crate::domain::models::{DependencyFacts, Task};

/// Service for building the per-request dependency graph, counting
/// dependents and detecting circular dependencies.
///
/// The graph is rebuilt from scratch on every call and never mutated
/// afterwards. Dependencies naming ids that are not in the task list are
/// skipped: they neither count as dependents nor take part in cycles.
#[derive(Debug, Clone, Default)]
pub struct DependencyResolver;

/// Result of analysing one task list. Indices refer to positions in the
/// list that was analysed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphAnalysis {
    /// `adjacency[i]` holds the (known, distinct) dependencies of task `i`
    adjacency: Vec<Vec<usize>>,
    dependents: Vec<usize>,
    cycle_group_of: Vec<Option<usize>>,
    cycle_groups: Vec<Vec<usize>>,
}

impl GraphAnalysis {
    /// Number of tasks in the graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no tasks.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of distinct other tasks depending on task `index`.
    pub fn dependents(&self, index: usize) -> usize {
        self.dependents.get(index).copied().unwrap_or(0)
    }

    /// Whether task `index` is part of any cycle.
    pub fn in_cycle(&self, index: usize) -> bool {
        self.cycle_group_of.get(index).is_some_and(Option::is_some)
    }

    /// Whether any cycle was found.
    pub fn has_cycles(&self) -> bool {
        !self.cycle_groups.is_empty()
    }

    /// Groups of mutually reachable tasks (plus self-dependent tasks), each
    /// sorted by index, ordered by their first member.
    pub fn cycle_groups(&self) -> &[Vec<usize>] {
        &self.cycle_groups
    }

    /// The cycle group containing task `index`, if any.
    pub fn cycle_group(&self, index: usize) -> Option<&[usize]> {
        let group = (*self.cycle_group_of.get(index)?)?;
        self.cycle_groups.get(group).map(Vec::as_slice)
    }

    /// One concrete cycle through the group's first member, closed back on
    /// itself: `[a, b, c, a]`.
    pub fn cycle_path(&self, group: usize) -> Vec<usize> {
        let Some(members) = self.cycle_groups.get(group) else {
            return Vec::new();
        };
        let start = members[0];
        let in_group = |node: usize| self.cycle_group_of[node] == Some(group);

        // BFS inside the group until some node has an edge back to start.
        let mut parent: HashMap<usize, usize> = HashMap::new();
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for &next in &self.adjacency[node] {
                if next == start {
                    let mut path = vec![start, node];
                    let mut cursor = node;
                    while cursor != start {
                        cursor = parent[&cursor];
                        path.push(cursor);
                    }
                    // walked backwards from `node`; fix orientation
                    path.reverse();
                    if node == start {
                        path.truncate(2);
                    }
                    return path;
                }
                if in_group(next) && !parent.contains_key(&next) {
                    parent.insert(next, node);
                    queue.push_back(next);
                }
            }
        }
        Vec::new()
    }

    /// Collect the facts the scoring engine needs for task `index`.
    pub fn facts(&self, index: usize, tasks: &[Task]) -> DependencyFacts {
        DependencyFacts {
            dependents: self.dependents(index),
            in_cycle: self.in_cycle(index),
            cycle_members: self
                .cycle_group(index)
                .unwrap_or_default()
                .iter()
                .map(|&member| tasks[member].id.clone())
                .collect(),
        }
    }
}

impl DependencyResolver {
    /// Create a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Build the dependency graph for `tasks` and analyse it.
    pub fn analyze(&self, tasks: &[Task]) -> GraphAnalysis {
        let adjacency = build_adjacency(tasks);

        let mut dependents = vec![0; tasks.len()];
        for (node, deps) in adjacency.iter().enumerate() {
            for &dep in deps {
                if dep != node {
                    dependents[dep] += 1;
                }
            }
        }

        let cycle_groups = CycleFinder::new(&adjacency).run();
        let mut cycle_group_of = vec![None; tasks.len()];
        for (group, members) in cycle_groups.iter().enumerate() {
            for &member in members {
                cycle_group_of[member] = Some(group);
            }
        }

        tracing::debug!(
            tasks = tasks.len(),
            edges = adjacency.iter().map(Vec::len).sum::<usize>(),
            cycle_groups = cycle_groups.len(),
            "dependency graph analysed"
        );

        GraphAnalysis {
            adjacency,
            dependents,
            cycle_group_of,
            cycle_groups,
        }
    }

    /// Detect circular dependencies in a set of tasks, returning one cycle
    /// as a closed path of task ids (`A -> B -> A` is `["A", "B", "A"]`).
    pub fn detect_cycle(&self, tasks: &[Task]) -> Option<Vec<String>> {
        let analysis = self.analyze(tasks);
        analysis.has_cycles().then(|| {
            analysis
                .cycle_path(0)
                .into_iter()
                .map(|i| tasks[i].id.clone())
                .collect()
        })
    }
}

/// Resolve dependency ids to task indices. Unknown ids are dropped; when
/// ids collide the first task wins.
fn build_adjacency(tasks: &[Task]) -> Vec<Vec<usize>> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(tasks.len());
    for (i, task) in tasks.iter().enumerate() {
        index.entry(task.id.as_str()).or_insert(i);
    }

    tasks
        .iter()
        .map(|task| {
            let mut deps: Vec<usize> = Vec::with_capacity(task.dependencies.len());
            for dep in &task.dependencies {
                match index.get(dep.as_str()) {
                    Some(&target) if !deps.contains(&target) => deps.push(target),
                    Some(_) => {}
                    None => {
                        tracing::debug!(
                            task = %task.id,
                            dependency = %dep,
                            "ignoring unknown dependency"
                        );
                    }
                }
            }
            deps
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Iterative three-colour depth-first search.
///
/// A back edge into an in-progress node closes a cycle. Low-link
/// bookkeeping carries that information through nodes that are already
/// done, so a node whose only route back runs through a finished node is
/// still reported. Finished nodes are never re-explored.
struct CycleFinder<'a> {
    adjacency: &'a [Vec<usize>],
    state: Vec<VisitState>,
    discovered_at: Vec<usize>,
    low_link: Vec<usize>,
    /// Nodes visited but not yet assigned to a group
    pending: Vec<usize>,
    is_pending: Vec<bool>,
    clock: usize,
    groups: Vec<Vec<usize>>,
}

struct Frame {
    node: usize,
    next_edge: usize,
}

impl<'a> CycleFinder<'a> {
    fn new(adjacency: &'a [Vec<usize>]) -> Self {
        let n = adjacency.len();
        Self {
            adjacency,
            state: vec![VisitState::Unvisited; n],
            discovered_at: vec![0; n],
            low_link: vec![0; n],
            pending: Vec::new(),
            is_pending: vec![false; n],
            clock: 0,
            groups: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Vec<usize>> {
        for root in 0..self.adjacency.len() {
            if self.state[root] == VisitState::Unvisited {
                self.visit_from(root);
            }
        }
        self.groups.sort_by_key(|group| group[0]);
        self.groups
    }

    fn discover(&mut self, node: usize) {
        self.state[node] = VisitState::InProgress;
        self.discovered_at[node] = self.clock;
        self.low_link[node] = self.clock;
        self.clock += 1;
        self.pending.push(node);
        self.is_pending[node] = true;
    }

    fn visit_from(&mut self, root: usize) {
        self.discover(root);
        let mut stack = vec![Frame {
            node: root,
            next_edge: 0,
        }];

        while let Some(top) = stack.last_mut() {
            let node = top.node;
            let edge = top.next_edge;
            top.next_edge += 1;

            if let Some(&next) = self.adjacency[node].get(edge) {
                match self.state[next] {
                    VisitState::Unvisited => {
                        self.discover(next);
                        stack.push(Frame {
                            node: next,
                            next_edge: 0,
                        });
                    }
                    _ if self.is_pending[next] => {
                        self.low_link[node] = self.low_link[node].min(self.discovered_at[next]);
                    }
                    _ => {}
                }
                continue;
            }

            stack.pop();
            self.state[node] = VisitState::Done;
            if let Some(parent) = stack.last() {
                self.low_link[parent.node] = self.low_link[parent.node].min(self.low_link[node]);
            }
            if self.low_link[node] == self.discovered_at[node] {
                self.close_group(node);
            }
        }
    }

    fn close_group(&mut self, root: usize) {
        let mut members = Vec::new();
        while let Some(member) = self.pending.pop() {
            self.is_pending[member] = false;
            members.push(member);
            if member == root {
                break;
            }
        }

        let self_loop = self.adjacency[root].contains(&root);
        if members.len() > 1 || self_loop {
            members.sort_unstable();
            self.groups.push(members);
        }
    }
}
