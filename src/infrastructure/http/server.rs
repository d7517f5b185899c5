use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;

use super::handlers::{analyze_tasks, health, suggest_tasks, suggest_tasks_query, AppState};
use crate::domain::models::ServerConfig;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/tasks/analyze/", post(analyze_tasks))
        .route(
            "/api/tasks/suggest/",
            get(suggest_tasks_query).post(suggest_tasks),
        )
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
}
