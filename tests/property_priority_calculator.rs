//! Property tests for the factor functions and strategy blending.

use chrono::NaiveDate;
use proptest::prelude::*;
use taskrank::services::priority_calculator::{
    dependents_score, effort_score, importance_score, urgency_for_days,
};
use taskrank::{PriorityCalculator, Strategy as ScoringStrategy, Task};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn any_strategy() -> impl Strategy<Value = ScoringStrategy> {
    prop::sample::select(ScoringStrategy::ALL.to_vec())
}

proptest! {
    /// Property: urgency never increases once the due date is today or later
    #[test]
    fn prop_urgency_non_increasing_from_today(days in 0i64..400) {
        prop_assert!(urgency_for_days(days + 1) <= urgency_for_days(days));
    }

    /// Property: overdue tasks stay in [0.9, 1.0] and grow with lateness
    #[test]
    fn prop_overdue_urgency_bounded(late in 1i64..10_000) {
        let score = urgency_for_days(-late);
        prop_assert!((0.9..=1.0).contains(&score));
        prop_assert!(urgency_for_days(-late - 1) >= score);
    }

    /// Property: importance is non-decreasing and always in [0, 1]
    #[test]
    fn prop_importance_monotonic(raw in -50i64..50) {
        let score = importance_score(raw);
        prop_assert!((0.0..=1.0).contains(&score));
        prop_assert!(importance_score(raw + 1) >= score);
    }

    /// Property: more hours never score higher
    #[test]
    fn prop_effort_non_increasing(hours in 0.0f64..500.0, extra in 0.0f64..50.0) {
        let score = effort_score(Some(hours));
        prop_assert!((0.0..=1.0).contains(&score));
        prop_assert!(effort_score(Some(hours + extra)) <= score);
    }

    /// Property: more dependents never score lower
    #[test]
    fn prop_dependents_non_decreasing(count in 0usize..1000) {
        prop_assert!(dependents_score(count + 1) >= dependents_score(count));
    }

    /// Property: every strategy keeps the final score in [0, 1]
    #[test]
    fn prop_final_score_in_unit_interval(
        strategy in any_strategy(),
        offset in -60i64..400,
        hours in prop::option::of(0.0f64..200.0),
        importance in -5i64..15,
        dependents in 0usize..10,
    ) {
        let mut task = Task::new("Property task")
            .with_due_date(today() + chrono::Duration::days(offset))
            .with_importance(importance);
        task.estimated_hours = hours;

        let score = PriorityCalculator::new().calculate(&task, dependents, strategy, today());
        prop_assert!((0.0..=1.0).contains(&score));
    }
}

#[test]
fn test_weights_sum_to_one() {
    for strategy in ScoringStrategy::ALL {
        assert!((strategy.weights().total() - 1.0).abs() < 1e-9, "{strategy}");
    }
}

#[test]
fn test_documented_anchors() {
    assert_eq!(urgency_for_days(0), 1.0);
    assert!((urgency_for_days(7) - 0.70).abs() < 1e-12);
    assert!((urgency_for_days(14) - 0.50).abs() < 1e-12);
    assert!((urgency_for_days(30) - 0.30).abs() < 1e-12);
    assert!((importance_score(5) - 0.444).abs() < 0.01);
    assert_eq!(effort_score(Some(0.5)), 1.0);
    assert_eq!(effort_score(None), 0.5);
    assert_eq!(
        [0, 1, 2, 3, 5].map(dependents_score),
        [0.3, 0.6, 0.8, 0.8, 1.0]
    );
}
