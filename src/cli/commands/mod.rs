//! CLI command implementations.

pub mod analyze;
pub mod serve;
pub mod strategies;
pub mod suggest;

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::domain::models::AnalyzeRequest;

/// Read a task list from `path`, or stdin when `path` is `-`.
///
/// A `--strategy` flag overrides any strategy named in the file.
pub fn load_request(path: &Path, strategy: Option<String>) -> Result<AnalyzeRequest> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read tasks from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read task file {}", path.display()))?
    };

    parse_request(&raw, strategy)
}

/// Parse either a bare task array or an `{"tasks": [...], "strategy": ...}` object.
pub fn parse_request(raw: &str, strategy: Option<String>) -> Result<AnalyzeRequest> {
    let value: Value = serde_json::from_str(raw).context("Task list is not valid JSON")?;
    let mut request = match value {
        Value::Array(tasks) => AnalyzeRequest::new(tasks, None),
        object @ Value::Object(_) => {
            serde_json::from_value(object).context("Task list object is malformed")?
        }
        _ => bail!("Task list must be a JSON array or an object with a \"tasks\" field"),
    };

    if strategy.is_some() {
        request.strategy = strategy;
    }
    Ok(request)
}

pub(crate) fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}
