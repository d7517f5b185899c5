//! Scoring throughput for growing task lists.
//!
//! ```bash
//! cargo bench --bench priority_calculation
//! ```

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};
use taskrank::services::DependencyResolver;
use taskrank::{AnalyzeRequest, Strategy, Task, TaskAnalyzer};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

/// Tasks where each depends on the two before it, with a cycle every 50.
fn task_entries(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let mut deps: Vec<String> = (1..=2)
                .filter(|d| i >= *d)
                .map(|d| format!("t{}", i - d))
                .collect();
            if i % 50 == 0 && i + 3 < count {
                deps.push(format!("t{}", i + 3));
            }
            json!({
                "id": format!("t{i}"),
                "title": format!("Task {i}"),
                "due_date": (today() + Duration::days((i % 60) as i64 - 10)).to_string(),
                "estimated_hours": (i % 24) as f64 + 0.5,
                "importance": (i % 10) + 1,
                "dependencies": deps,
            })
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = TaskAnalyzer::new();
    let mut group = c.benchmark_group("analyze");

    for size in [10usize, 100, 1000, 5000] {
        let entries = task_entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| {
                let request = AnalyzeRequest::new(entries.clone(), None);
                black_box(analyzer.analyze(request, today()).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_rank_by_strategy(c: &mut Criterion) {
    let analyzer = TaskAnalyzer::new();
    let tasks: Vec<Task> = analyzer.validate_tasks(task_entries(1000)).unwrap();
    let mut group = c.benchmark_group("rank_1000");

    for strategy in Strategy::ALL {
        group.bench_function(strategy.as_str(), |b| {
            b.iter(|| black_box(analyzer.rank(&tasks, strategy, today())));
        });
    }
    group.finish();
}

fn bench_graph_analysis(c: &mut Criterion) {
    let analyzer = TaskAnalyzer::new();
    let resolver = DependencyResolver::new();
    let tasks = analyzer.validate_tasks(task_entries(5000)).unwrap();

    c.bench_function("dependency_graph_5000", |b| {
        b.iter(|| black_box(resolver.analyze(&tasks)));
    });
}

criterion_group!(benches, bench_analyze, bench_rank_by_strategy, bench_graph_analysis);
criterion_main!(benches);
