//! `taskrank serve`

use anyhow::Result;

use crate::cli::types::ServeArgs;
use crate::domain::models::{Config, ServerConfig};
use crate::infrastructure::http::{serve, AppState};
use crate::services::TaskAnalyzer;

/// Apply command-line overrides on top of the configured bind address.
pub fn server_config(args: ServeArgs, config: &Config) -> ServerConfig {
    let mut server = config.server.clone();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    server
}

/// Run `taskrank serve` until interrupted.
pub async fn execute(args: ServeArgs, config: &Config, analyzer: TaskAnalyzer) -> Result<()> {
    let server = server_config(args, config);
    serve(&server, AppState::new(analyzer)).await
}
