//! Common test utilities for integration tests
//!
//! Shared fixtures for building task lists and a fixed reference date.

#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::{json, Value};
use taskrank::AnalyzeRequest;

/// Reference date used by every integration test
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
}

/// `today() + offset` days, formatted as the wire date string
pub fn due_in(offset: i64) -> String {
    (today() + chrono::Duration::days(offset)).to_string()
}

/// Minimal task entry with an explicit id
pub fn task(id: &str) -> Value {
    json!({ "id": id, "title": format!("Task {id}") })
}

/// Task entry with an explicit id and dependency list
pub fn task_with_deps(id: &str, deps: &[&str]) -> Value {
    json!({ "id": id, "title": format!("Task {id}"), "dependencies": deps })
}

pub fn request(tasks: Vec<Value>, strategy: Option<&str>) -> AnalyzeRequest {
    AnalyzeRequest::new(tasks, strategy.map(str::to_string))
}

/// Setup test logging
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
