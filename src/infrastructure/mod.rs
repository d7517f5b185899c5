//! Infrastructure layer
//!
//! Adapters around the scoring engine:
//! - Configuration loading (figment)
//! - Structured logging (tracing)
//! - HTTP binding of the analyze and suggest operations (axum)

pub mod config;
pub mod http;
pub mod logging;
