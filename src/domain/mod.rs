//! Domain layer for the taskrank scoring engine
//!
//! This module contains the task models, the strategy weight table,
//! domain errors, and the ports the services implement.

pub mod errors;
/// Domain models
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{DomainError, DomainResult};
