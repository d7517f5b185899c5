//! HTTP binding
//!
//! Exposes the analyze and suggest operations over axum:
//! - `POST /api/tasks/analyze/`
//! - `GET|POST /api/tasks/suggest/`
//! - `GET /health`

/// Error mapping
pub mod error;
pub mod handlers;
/// Router and listener
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use server::{router, serve};
