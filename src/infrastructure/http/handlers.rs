//! Request handlers for the task endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::error::ApiError;
use crate::domain::models::{AnalyzeRequest, AnalyzeResponse, SuggestResponse};
use crate::services::TaskAnalyzer;

const SUGGEST_USAGE: &str = "No tasks provided. Use POST /api/tasks/analyze/ to analyze tasks, \
     or pass a URL-encoded JSON array as the tasks query parameter.";

/// Application state shared by the handlers
#[derive(Clone)]
pub struct AppState {
    /// Analyzer shared by every request
    pub analyzer: Arc<TaskAnalyzer>,
}

impl AppState {
    /// Wrap an analyzer for sharing.
    pub fn new(analyzer: TaskAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

/// Query parameters of `GET /api/tasks/suggest/`
#[derive(Debug, Default, Deserialize)]
pub struct SuggestParams {
    /// JSON array (or single object) of tasks
    pub tasks: Option<String>,
    /// Strategy name
    pub strategy: Option<String>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /api/tasks/analyze/`
pub async fn analyze_tasks(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload?;
    debug!(tasks = request.tasks.len(), "analyze request received");

    let response = state.analyzer.analyze(request, today())?;
    Ok(Json(response))
}

/// `POST /api/tasks/suggest/`
pub async fn suggest_tasks(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.analyzer.suggest(request, today())?;
    Ok(Json(response))
}

/// `GET /api/tasks/suggest/?tasks=...&strategy=...`
pub async fn suggest_tasks_query(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let Some(raw) = params.tasks else {
        let strategy = state.analyzer.resolve_strategy(params.strategy.as_deref())?;
        return Ok(Json(SuggestResponse {
            suggestions: Vec::new(),
            strategy_used: strategy.to_string(),
            total_tasks_analyzed: 0,
            circular_dependencies_detected: false,
            message: Some(SUGGEST_USAGE.to_string()),
        }));
    };

    let request = AnalyzeRequest::new(parse_task_list(&raw)?, params.strategy);
    let response = state.analyzer.suggest(request, today())?;
    Ok(Json(response))
}

/// Parse the `tasks` query parameter. A single object counts as a
/// one-element list.
pub fn parse_task_list(raw: &str) -> Result<Vec<Value>, ApiError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        ApiError::BadRequest(format!("Invalid JSON format in tasks parameter: {e}"))
    })?;
    match value {
        Value::Array(items) => Ok(items),
        object @ Value::Object(_) => Ok(vec![object]),
        _ => Err(ApiError::BadRequest(
            "tasks parameter must be a JSON array or object".to_string(),
        )),
    }
}
