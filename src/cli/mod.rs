//! Command-line interface
//!
//! Commands read a task list from a JSON file (or stdin with `-`) and print
//! either a table or, with `--json`, the same response body the HTTP API
//! returns.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands, ServeArgs, TaskFileArgs};

use crate::domain::DomainError;

/// Report a failed command and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let kind = err
            .downcast_ref::<DomainError>()
            .map_or("Error", DomainError::kind);
        let body = serde_json::json!({
            "error": format!("{err:#}"),
            "kind": kind,
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
