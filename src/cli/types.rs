//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "taskrank")]
#[command(about = "Taskrank - rank tasks by urgency, importance, effort and dependents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .taskrank/config.yaml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and rank every task in a task list
    Analyze(TaskFileArgs),

    /// Show the three tasks to work on next
    Suggest(TaskFileArgs),

    /// Serve the HTTP API
    Serve(ServeArgs),

    /// List the scoring strategies and their weights
    Strategies,
}

/// Arguments shared by `analyze` and `suggest`
#[derive(Args, Debug, Clone)]
pub struct TaskFileArgs {
    /// JSON file holding a task array or a {"tasks": [...]} object; `-` reads stdin
    pub file: PathBuf,

    /// Strategy (smart_balance, fastest_wins, high_impact, deadline_driven)
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Score as if today were this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,
}

/// Arguments of `serve`
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Host to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}
