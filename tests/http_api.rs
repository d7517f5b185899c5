//! HTTP binding tests: handlers are driven directly with axum extractors.

use axum::body::to_bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};
use taskrank::infrastructure::http::handlers::{
    analyze_tasks, health, suggest_tasks, suggest_tasks_query, SuggestParams,
};
use taskrank::infrastructure::http::{router, ApiError, AppState};
use taskrank::{AnalyzeRequest, DomainError, TaskAnalyzer};

fn state() -> AppState {
    AppState::new(TaskAnalyzer::new())
}

async fn body_json(error: ApiError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let Json(body) = health().await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_router_builds() {
    let _router = router(state());
}

#[tokio::test]
async fn test_analyze_endpoint() {
    let request = AnalyzeRequest::new(
        vec![
            json!({"id": "A", "title": "Write report", "importance": 9, "dependencies": ["B"]}),
            json!({"id": "B", "title": "Gather data", "importance": 4}),
        ],
        Some("high_impact".to_string()),
    );

    let Json(response) = analyze_tasks(State(state()), Ok(Json(request))).await.unwrap();

    assert_eq!(response.strategy_used, "high_impact");
    assert_eq!(response.total_tasks, 2);
    assert_eq!(response.tasks[0].task.id, "A");
}

#[tokio::test]
async fn test_analyze_bogus_strategy_maps_to_400() {
    let request = AnalyzeRequest::new(vec![json!({"title": "A"})], Some("bogus".to_string()));

    let err = analyze_tasks(State(state()), Ok(Json(request))).await.unwrap_err();
    let (status, body) = body_json(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidStrategy");
    assert!(body["error"].as_str().unwrap().contains("bogus"));
}

#[tokio::test]
async fn test_suggest_post() {
    let request = AnalyzeRequest::new(
        (0..5).map(|i| json!({"title": format!("Task {i}"), "importance": i + 1})).collect(),
        None,
    );

    let Json(response) = suggest_tasks(State(state()), Ok(Json(request))).await.unwrap();

    assert_eq!(response.suggestions.len(), 3);
    assert_eq!(response.suggestions[0].task.task.title, "Task 4");
    assert_eq!(response.total_tasks_analyzed, 5);
}

#[tokio::test]
async fn test_suggest_query_without_tasks_returns_usage() {
    let Json(response) = suggest_tasks_query(State(state()), Query(SuggestParams::default()))
        .await
        .unwrap();

    assert!(response.suggestions.is_empty());
    assert_eq!(response.strategy_used, "smart_balance");
    assert!(response.message.is_some());
}

#[tokio::test]
async fn test_suggest_query_single_object() {
    let params = SuggestParams {
        tasks: Some(r#"{"title": "Only one"}"#.to_string()),
        strategy: Some("fastest_wins".to_string()),
    };

    let Json(response) = suggest_tasks_query(State(state()), Query(params)).await.unwrap();

    assert_eq!(response.suggestions.len(), 1);
    assert_eq!(response.strategy_used, "fastest_wins");
    assert!(response.message.is_none());
}

#[tokio::test]
async fn test_suggest_query_bad_json() {
    let params = SuggestParams {
        tasks: Some("not json".to_string()),
        strategy: None,
    };

    let err = suggest_tasks_query(State(state()), Query(params)).await.unwrap_err();
    let (status, body) = body_json(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "ValidationError");
}

#[tokio::test]
async fn test_domain_validation_error_body() {
    let err = ApiError::from(DomainError::Validation("no tasks provided".to_string()));
    let (status, body) = body_json(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "ValidationError");
    assert_eq!(body["error"], "Validation failed: no tasks provided");
}
